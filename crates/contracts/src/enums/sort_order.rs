use serde::{Deserialize, Serialize};

/// Direction of the price sort in the skip catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    /// Value used in the `<select>` element
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "Price: Low to High",
            SortOrder::Descending => "Price: High to Low",
        }
    }

    /// Unknown values fall back to ascending.
    pub fn from_str(s: &str) -> Self {
        match s {
            "desc" => SortOrder::Descending,
            _ => SortOrder::Ascending,
        }
    }

    pub fn all() -> [SortOrder; 2] {
        [SortOrder::Ascending, SortOrder::Descending]
    }
}
