use serde::{Deserialize, Serialize};

/// The fixed set of reference categories.
///
/// Each category corresponds to one sheet of the reference workbook and one
/// pair of structural column headers (`incorrect {category}` /
/// `correct {category}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Trade,
    State,
    District,
    Type,
    Response,
}

impl Category {
    /// All categories in reference-load order.
    pub const ALL: [Category; 5] = [
        Category::Trade,
        Category::State,
        Category::District,
        Category::Type,
        Category::Response,
    ];

    /// Sheet name within the reference workbook (also the target column name).
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Trade => "trade",
            Category::State => "state",
            Category::District => "district",
            Category::Type => "type",
            Category::Response => "response",
        }
    }

    /// Structural header of the incorrect-value column in the reference sheet.
    pub fn incorrect_header(self) -> String {
        format!("incorrect {}", self.as_str())
    }

    /// Structural header of the correct-value column in the reference sheet.
    pub fn correct_header(self) -> String {
        format!("correct {}", self.as_str())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_follow_sheet_name() {
        assert_eq!(Category::Trade.incorrect_header(), "incorrect trade");
        assert_eq!(Category::Response.correct_header(), "correct response");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("District".parse::<Category>().unwrap(), Category::District);
        assert!("region".parse::<Category>().is_err());
    }
}
