//! Project card filtering.
//!
//! Filter buttons carry a `data-filter` token (`all` or a category); project
//! cards carry a `data-category`. Shown cards get the entrance animation
//! marker so the reveal library animates them in.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

pub const FILTER_ATTR: &str = "data-filter";
pub const CATEGORY_ATTR: &str = "data-category";
/// Reveal-library attribute and value set on shown cards.
pub const ANIMATION_ATTR: &str = "data-aos";
pub const ANIMATION_VALUE: &str = "fade-up";
/// Class marking the selected filter button.
pub const FILTER_ACTIVE_CLASS: &str = "active";

/// The selected filter category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Parse a `data-filter` token. A missing or empty token selects
    /// everything. Tokens are taken as written, whitespace included.
    #[must_use]
    pub fn parse(token: Option<&str>) -> Self {
        match token {
            None | Some("" | "all") => Self::All,
            Some(category) => Self::Category(category.to_owned()),
        }
    }

    /// Whether a card with `category` stays visible under this filter.
    #[must_use]
    pub fn shows(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => category.is_some_and(|c| c == wanted),
        }
    }
}

/// Visibility for each card, in order.
#[must_use]
pub fn visibility<S: AsRef<str>>(filter: &Filter, categories: &[Option<S>]) -> Vec<bool> {
    categories
        .iter()
        .map(|c| filter.shows(c.as_ref().map(|s| s.as_ref())))
        .collect()
}
