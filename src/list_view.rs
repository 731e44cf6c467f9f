//! Search and sort for the list view.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::CatalogEntry;
use crate::navigation::{NavigationContext, Provenance};

/// Sort field options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Id,
    Name,
    Height,
    Weight,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Id, SortKey::Name, SortKey::Height, SortKey::Weight];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::Height => "height",
            SortKey::Weight => "weight",
        }
    }

    fn compare(&self, a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
        match self {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Height => a.height.cmp(&b.height),
            SortKey::Weight => a.weight.cmp(&b.weight),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown sort key {s:?} (expected id, name, height or weight)"))
    }
}

/// Sort direction options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search text plus sort order for the list view.
///
/// A plain value: the presentation layer keeps the current one and swaps
/// it for a modified copy on every user change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
}

impl ListQuery {
    pub fn new(search: impl Into<String>, sort_key: SortKey, sort_direction: SortDirection) -> Self {
        Self {
            search: search.into(),
            sort_key,
            sort_direction,
        }
    }

    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self.clone()
        }
    }

    pub fn with_sort_key(&self, sort_key: SortKey) -> Self {
        Self {
            sort_key,
            ..self.clone()
        }
    }

    pub fn toggled_direction(&self) -> Self {
        Self {
            sort_direction: self.sort_direction.toggled(),
            ..self.clone()
        }
    }

    /// Case-insensitive substring match on the entry name.
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        matches_needle(entry, &self.search.to_lowercase())
    }

    /// Filter `entries` by the search text, then sort them.
    ///
    /// The sort is stable in both directions: entries with equal keys keep
    /// their catalog order.
    pub fn apply<'a>(&self, entries: &'a [CatalogEntry]) -> Vec<&'a CatalogEntry> {
        let needle = self.search.to_lowercase();
        let mut out: Vec<&CatalogEntry> = entries
            .iter()
            .filter(|e| matches_needle(e, &needle))
            .collect();

        out.sort_by(|a, b| {
            let ord = self.sort_key.compare(a, b);
            match self.sort_direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
        out
    }

    /// The ids of [`apply`](Self::apply)'s result, tagged as coming from the list.
    pub fn navigation_context(&self, entries: &[CatalogEntry]) -> NavigationContext {
        let ids = self.apply(entries).iter().map(|e| e.id).collect();
        NavigationContext::new(ids, Provenance::List)
    }
}

/// `needle` must already be lowercase.
fn matches_needle(entry: &CatalogEntry, needle: &str) -> bool {
    needle.is_empty() || entry.name.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::TypeTag;

    fn entry(id: u32, name: &str, height: u32, weight: u32) -> CatalogEntry {
        CatalogEntry {
            id,
            name: name.into(),
            height,
            weight,
            base_experience: 0,
            types: vec![TypeTag::Normal],
            sprite: None,
            abilities: Vec::new(),
            stats: Vec::new(),
            moves: Vec::new(),
        }
    }

    fn catalog() -> Vec<CatalogEntry> {
        vec![
            entry(1, "bulbasaur", 7, 69),
            entry(4, "charmander", 6, 85),
            entry(7, "squirtle", 5, 90),
            entry(25, "pikachu", 4, 60),
            entry(26, "raichu", 8, 300),
            entry(39, "jigglypuff", 5, 55),
        ]
    }

    fn ids(entries: &[&CatalogEntry]) -> Vec<u32> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn default_query_is_id_ascending() {
        let c = catalog();
        assert_eq!(ids(&ListQuery::default().apply(&c)), vec![1, 4, 7, 25, 26, 39]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let c = catalog();
        let q = ListQuery::default().with_search("CHU");
        assert_eq!(ids(&q.apply(&c)), vec![25, 26]);
        for e in q.apply(&c) {
            assert!(e.name.to_lowercase().contains("chu"));
            assert!(q.matches(e));
        }
    }

    #[test]
    fn apply_keeps_exactly_the_matching_entries() {
        let c = catalog();
        for search in ["", "a", "PUFF", "mewtwo"] {
            let q = ListQuery::default().with_search(search);
            let expected: Vec<u32> = c.iter().filter(|e| q.matches(e)).map(|e| e.id).collect();
            assert_eq!(ids(&q.apply(&c)), expected, "{search:?}");
        }
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let c = catalog();
        assert!(ListQuery::default().with_search("mewtwo").apply(&c).is_empty());
    }

    #[test]
    fn sorts_by_each_key() {
        let c = catalog();
        let q = ListQuery::default();
        assert_eq!(
            ids(&q.with_sort_key(SortKey::Name).apply(&c)),
            vec![1, 4, 39, 25, 26, 7]
        );
        assert_eq!(
            ids(&q.with_sort_key(SortKey::Weight).apply(&c)),
            vec![39, 25, 1, 4, 7, 26]
        );
    }

    #[test]
    fn ties_keep_catalog_order_in_both_directions() {
        let c = catalog();
        let asc = ListQuery::new("", SortKey::Height, SortDirection::Asc);
        // squirtle (7) and jigglypuff (39) share height 5
        assert_eq!(ids(&asc.apply(&c)), vec![25, 7, 39, 4, 1, 26]);
        assert_eq!(ids(&asc.toggled_direction().apply(&c)), vec![26, 1, 4, 7, 39, 25]);
    }

    #[test]
    fn opposite_directions_reverse_without_ties() {
        let c = catalog();
        for key in [SortKey::Id, SortKey::Name, SortKey::Weight] {
            let asc = ListQuery::new("", key, SortDirection::Asc);
            let mut forward = ids(&asc.apply(&c));
            forward.reverse();
            assert_eq!(forward, ids(&asc.toggled_direction().apply(&c)), "{key}");
        }
    }

    #[test]
    fn context_follows_visible_order() {
        let c = catalog();
        let q = ListQuery::new("a", SortKey::Weight, SortDirection::Desc);
        let ctx = q.navigation_context(&c);
        assert_eq!(ctx.ids(), &[26, 4, 1, 25][..]);
        assert_eq!(ctx.source(), Provenance::List);
    }

    #[test]
    fn sort_key_parsing() {
        assert_eq!("height".parse::<SortKey>().unwrap(), SortKey::Height);
        assert!("speed".parse::<SortKey>().is_err());
    }
}
