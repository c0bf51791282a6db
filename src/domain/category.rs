// Category domain model
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Name of the category new notes are filed under when the user has one.
pub const DEFAULT_CATEGORY_NAME: &str = "Random Thoughts";

/// Color given to a user-created category when none is chosen.
pub const NEW_CATEGORY_COLOR: &str = "#F44336";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub i64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CategoryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(CategoryId)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub color: String,
}

impl Category {
    pub fn new(id: CategoryId, name: String, color: String) -> Self {
        Self { id, name, color }
    }
}

/// Pick the category a freshly created note belongs to.
/// Prefers "Random Thoughts" (any casing), then the first loaded category.
pub fn default_category(categories: &[Category]) -> Option<&Category> {
    categories
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(DEFAULT_CATEGORY_NAME))
        .or_else(|| categories.first())
}
