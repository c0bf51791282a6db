// Dashboard category selection
use super::category::CategoryId;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The dashboard filter. Parsed once where user input enters the client,
/// so every comparison downstream is on `CategoryId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Category(CategoryId),
}

#[derive(Debug, Error, PartialEq)]
#[error("invalid selection '{0}': expected 'all' or a category id")]
pub struct SelectionParseError(pub String);

impl Selection {
    pub fn matches(&self, category: Option<CategoryId>) -> bool {
        match self {
            Selection::All => true,
            Selection::Category(id) => category == Some(*id),
        }
    }

    pub fn is_selected(&self, id: CategoryId) -> bool {
        *self == Selection::Category(id)
    }
}

impl FromStr for Selection {
    type Err = SelectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Selection::All);
        }
        trimmed
            .parse::<CategoryId>()
            .map(Selection::Category)
            .map_err(|_| SelectionParseError(s.to_string()))
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "all"),
            Selection::Category(id) => write!(f, "{}", id),
        }
    }
}
