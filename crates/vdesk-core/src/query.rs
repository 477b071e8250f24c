//! List filtering shared by the property, event, offer and booking views.
//!
//! Filters never mutate or reorder their input; they return references to
//! the matching entries in source order and are recomputed on every call.

use std::str::FromStr;

/// A search string prepared for matching.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    raw: String,
    lowered: String,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            lowered: raw.to_lowercase(),
        }
    }

    /// Case-insensitive substring match.
    pub fn matches_text(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.lowered)
    }

    /// Exact substring match, used for digit-string dates.
    pub fn matches_raw(&self, field: &str) -> bool {
        field.contains(&self.raw)
    }
}

/// Entities that can be matched against free-text search.
pub trait Searchable {
    fn matches(&self, query: &SearchQuery) -> bool;
}

/// Entities carrying a closed status value.
pub trait HasStatus {
    type Status: Copy + PartialEq;

    fn status(&self) -> Self::Status;
}

/// Status selector; `All` disables status filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter<S> {
    #[default]
    All,
    Only(S),
}

impl<S: PartialEq> StatusFilter<S> {
    pub fn accepts(&self, status: &S) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl<S: FromStr> FromStr for StatusFilter<S> {
    type Err = S::Err;

    /// `"all"` in any case selects everything; anything else must parse as a status.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Entries whose searchable fields contain `query`.
pub fn search<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let query = SearchQuery::new(query);
    items.iter().filter(|item| item.matches(&query)).collect()
}

/// Entries accepted by the status filter.
pub fn filter_by_status<'a, T: HasStatus>(items: &'a [T], filter: StatusFilter<T::Status>) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| filter.accepts(&item.status()))
        .collect()
}

/// Entries that match both the search text and the status filter.
pub fn search_with_status<'a, T>(items: &'a [T], query: &str, filter: StatusFilter<T::Status>) -> Vec<&'a T>
where
    T: Searchable + HasStatus,
{
    let query = SearchQuery::new(query);
    items
        .iter()
        .filter(|item| item.matches(&query) && filter.accepts(&item.status()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        name: &'static str,
        code: &'static str,
        on: bool,
    }

    impl Searchable for Item {
        fn matches(&self, query: &SearchQuery) -> bool {
            query.matches_text(self.name) || query.matches_raw(self.code)
        }
    }

    impl HasStatus for Item {
        type Status = bool;

        fn status(&self) -> bool {
            self.on
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { name: "Neon Night Club", code: "A1", on: true },
            Item { name: "Skybar Rooftop", code: "b2", on: false },
            Item { name: "Club Lounge", code: "C3", on: false },
        ]
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let items = items();
        let found = search(&items, "");
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].name, "Neon Night Club");
        assert_eq!(found[2].name, "Club Lounge");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let items = items();
        let found = search(&items, "club");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name, "Neon Night Club");
        assert_eq!(found[1].name, "Club Lounge");

        assert_eq!(search(&items, "SKYBAR").len(), 1);
    }

    #[test]
    fn test_raw_match_keeps_case() {
        let items = items();
        assert_eq!(search(&items, "b2").len(), 1);
        assert_eq!(search(&items, "c3").len(), 0);
    }

    #[test]
    fn test_filter_by_status() {
        let items = items();
        assert_eq!(filter_by_status(&items, StatusFilter::All).len(), 3);
        let off = filter_by_status(&items, StatusFilter::Only(false));
        assert_eq!(off.len(), 2);
        assert_eq!(off[0].name, "Skybar Rooftop");
    }

    #[test]
    fn test_search_with_status() {
        let items = items();
        let found = search_with_status(&items, "club", StatusFilter::Only(false));
        assert_eq!(found, vec![&items[2]]);
        assert!(search_with_status(&items, "nothing", StatusFilter::All).is_empty());
    }

    #[test]
    fn test_status_filter_parse_all() {
        let filter: StatusFilter<i32> = "ALL".parse().unwrap();
        assert_eq!(filter, StatusFilter::All);
        let filter: StatusFilter<i32> = "7".parse().unwrap();
        assert_eq!(filter, StatusFilter::Only(7));
        assert!("x".parse::<StatusFilter<i32>>().is_err());
    }
}
