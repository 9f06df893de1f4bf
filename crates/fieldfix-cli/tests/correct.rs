//! End-to-end: reference workbook + input CSV -> corrected CSV on disk.

use std::path::Path;

use fieldfix_cli::cli::CorrectArgs;
use fieldfix_cli::commands::run_correct;
use fieldfix_ingest::read_table;
use fieldfix_model::CellValue;

fn write_reference_dir(dir: &Path) {
    let sheets = [
        ("trade", "incorrect trade,correct trade\nfarming,Farming\nfarming.,Farming\n"),
        ("state", "incorrect state,correct state\nmaharastra,Maharashtra\n"),
        ("district", "incorrect district,correct district\npune city,Pune\n"),
        ("type", "incorrect type,correct type\nptp,PTP\n"),
        ("response", "incorrect response,correct response\nyes,Yes\nno,No\n"),
    ];
    for (name, body) in sheets {
        std::fs::write(dir.join(format!("{name}.csv")), body).unwrap();
    }
}

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

#[test]
fn corrects_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let refs = dir.path().join("refs");
    std::fs::create_dir(&refs).unwrap();
    write_reference_dir(&refs);

    let input = dir.path().join("main.csv");
    std::fs::write(
        &input,
        "id,trade,state,tr certificate approved on sip\n\
         1, Farming ,maharastra,YES\n\
         2,weaving,,no\n\
         3,,MAHARASTRA,maybe\n",
    )
    .unwrap();

    let args = CorrectArgs {
        input: input.clone(),
        refs,
        output: None,
        dry_run: false,
    };
    let result = run_correct(&args).unwrap();
    assert_eq!(result.rows, 3);

    let output = result.output.expect("output path");
    assert_eq!(output, dir.path().join("cleaned_data.csv"));

    let table = read_table(&output).unwrap();
    assert_eq!(
        table.columns,
        vec![
            "id",
            "trade",
            "correct trade",
            "state",
            "correct state",
            "tr certificate approved on sip",
            "correct tr certificate approved on sip",
        ]
    );

    // Row 1: both values resolve, source cells untouched.
    assert_eq!(table.rows[0][1], text(" Farming "));
    assert_eq!(table.rows[0][2], text("Farming"));
    assert_eq!(table.rows[0][4], text("Maharashtra"));
    assert_eq!(table.rows[0][6], text("Yes"));

    // Row 2: unknown trade flagged, empty state stays empty.
    assert_eq!(table.rows[1][2], text("#N/A"));
    assert_eq!(table.rows[1][3], CellValue::Missing);
    assert_eq!(table.rows[1][4], CellValue::Missing);
    assert_eq!(table.rows[1][6], text("No"));

    // Row 3: missing trade stays empty, unmapped response flagged.
    assert_eq!(table.rows[2][2], CellValue::Missing);
    assert_eq!(table.rows[2][6], text("#N/A"));

    // Absent targets were skipped, present ones corrected.
    let skipped: Vec<&str> = result
        .report
        .skipped
        .iter()
        .map(|(column, _)| column.as_str())
        .collect();
    assert!(skipped.contains(&"district"));
    assert!(skipped.contains(&"response"));
    assert!(skipped.contains(&"ar certificate approved on sip"));
    assert_eq!(result.report.columns.len(), 3);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let refs = dir.path().join("refs");
    std::fs::create_dir(&refs).unwrap();
    write_reference_dir(&refs);

    let input = dir.path().join("main.csv");
    std::fs::write(&input, "trade\nfarming\n").unwrap();

    let args = CorrectArgs {
        input,
        refs,
        output: None,
        dry_run: true,
    };
    let result = run_correct(&args).unwrap();
    assert!(result.output.is_none());
    assert!(!dir.path().join("cleaned_data.csv").exists());
    assert_eq!(result.report.columns[0].resolved, 1);
}

#[test]
fn incomplete_reference_dir_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let refs = dir.path().join("refs");
    std::fs::create_dir(&refs).unwrap();
    write_reference_dir(&refs);
    std::fs::remove_file(refs.join("district.csv")).unwrap();

    let input = dir.path().join("main.csv");
    std::fs::write(&input, "trade\nfarming\n").unwrap();

    let args = CorrectArgs {
        input,
        refs,
        output: None,
        dry_run: false,
    };
    let error = run_correct(&args).unwrap_err();
    assert!(format!("{error:#}").contains("district"));
}
