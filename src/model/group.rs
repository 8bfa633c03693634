use std::fmt;

/// Grouping axis for the average-histogram analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Genres,
    Decades,
    Directors,
}

impl GroupBy {
    pub fn label(&self) -> &'static str {
        match self {
            GroupBy::Genres => "genres",
            GroupBy::Decades => "decades",
            GroupBy::Directors => "directors",
        }
    }
}

/// Key of one materialized group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Genre(String),
    Decade(i32),
    Director(String),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Genre(name) => write!(f, "{name}"),
            GroupKey::Decade(decade) => write!(f, "{decade}s"),
            GroupKey::Director(name) => write!(f, "{name}"),
        }
    }
}
