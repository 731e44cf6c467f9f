//! Type filtering for the gallery view.

use crate::models::{CatalogEntry, TypeTag};
use crate::navigation::{NavigationContext, Provenance};

/// Set of selected type tags.
///
/// An entry passes when it carries any selected tag; an empty selection
/// lets everything through. Tags are kept in the order they were selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeFilter {
    selected: Vec<TypeTag>,
}

impl TypeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `tag` if absent, remove it otherwise.
    pub fn toggle(&mut self, tag: TypeTag) {
        match self.selected.iter().position(|t| *t == tag) {
            Some(i) => {
                self.selected.remove(i);
            }
            None => self.selected.push(tag),
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_active(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn is_selected(&self, tag: TypeTag) -> bool {
        self.selected.contains(&tag)
    }

    /// Selected tags, oldest selection first.
    pub fn selected(&self) -> impl Iterator<Item = TypeTag> + '_ {
        self.selected.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        self.selected.is_empty() || entry.types.iter().any(|t| self.selected.contains(t))
    }

    /// Entries passing the filter, in catalog order.
    pub fn apply<'a>(&self, entries: &'a [CatalogEntry]) -> Vec<&'a CatalogEntry> {
        entries.iter().filter(|e| self.matches(e)).collect()
    }

    /// The ids of [`apply`](Self::apply)'s result, tagged as coming from the gallery.
    pub fn navigation_context(&self, entries: &[CatalogEntry]) -> NavigationContext {
        let ids = self.apply(entries).iter().map(|e| e.id).collect();
        NavigationContext::new(ids, Provenance::Gallery)
    }

    /// Comma-separated selection in selection order, e.g. `"water, fire"`.
    pub fn summary(&self) -> String {
        self.selected()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromIterator<TypeTag> for TypeFilter {
    fn from_iter<I: IntoIterator<Item = TypeTag>>(iter: I) -> Self {
        let mut filter = Self::new();
        for tag in iter {
            if !filter.is_selected(tag) {
                filter.selected.push(tag);
            }
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(id: u32, types: &[TypeTag]) -> CatalogEntry {
        CatalogEntry {
            id,
            name: format!("entry-{id}"),
            height: 1,
            weight: 1,
            base_experience: 0,
            types: types.to_vec(),
            sprite: None,
            abilities: Vec::new(),
            stats: Vec::new(),
            moves: Vec::new(),
        }
    }

    fn catalog() -> Vec<CatalogEntry> {
        use crate::models::TypeTag::*;
        vec![
            entry(1, &[Grass, Poison]),
            entry(4, &[Fire]),
            entry(6, &[Fire, Flying]),
            entry(7, &[Water]),
            entry(25, &[Electric]),
            entry(60, &[Water]),
            entry(131, &[Water, Ice]),
        ]
    }

    fn ids(entries: &[&CatalogEntry]) -> Vec<u32> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn empty_selection_passes_everything_in_order() {
        let c = catalog();
        let f = TypeFilter::new();
        assert!(!f.is_active());
        assert_eq!(ids(&f.apply(&c)), vec![1, 4, 6, 7, 25, 60, 131]);
    }

    #[test]
    fn selection_is_a_union() {
        let c = catalog();
        let f: TypeFilter = [TypeTag::Fire, TypeTag::Water].into_iter().collect();
        assert_eq!(ids(&f.apply(&c)), vec![4, 6, 7, 60, 131]);
        for e in f.apply(&c) {
            assert!(e.has_type(TypeTag::Fire) || e.has_type(TypeTag::Water));
        }
    }

    #[test]
    fn no_match_is_empty() {
        let c = catalog();
        let f: TypeFilter = [TypeTag::Dragon].into_iter().collect();
        assert!(f.apply(&c).is_empty());
    }

    #[test]
    fn toggle_and_clear() {
        let mut f = TypeFilter::new();
        f.toggle(TypeTag::Water);
        f.toggle(TypeTag::Fire);
        assert_eq!(f.len(), 2);
        assert_eq!(f.summary(), "water, fire");
        assert_eq!(f.selected().collect::<Vec<_>>(), vec![TypeTag::Water, TypeTag::Fire]);
        f.toggle(TypeTag::Water);
        assert!(!f.is_selected(TypeTag::Water));
        assert_eq!(f.summary(), "fire");
        f.clear();
        assert!(f.is_empty());
        assert_eq!(f.summary(), "");
    }

    #[test]
    fn reselected_tag_moves_to_the_end() {
        let mut f = TypeFilter::new();
        f.toggle(TypeTag::Fire);
        f.toggle(TypeTag::Water);
        f.toggle(TypeTag::Fire);
        f.toggle(TypeTag::Fire);
        assert_eq!(f.summary(), "water, fire");
    }

    #[test]
    fn collecting_drops_duplicates_and_keeps_first_order() {
        let f: TypeFilter = [TypeTag::Ice, TypeTag::Fire, TypeTag::Ice].into_iter().collect();
        assert_eq!(f.len(), 2);
        assert_eq!(f.summary(), "ice, fire");
    }

    #[test]
    fn context_is_tagged_gallery() {
        let c = catalog();
        let f: TypeFilter = [TypeTag::Flying, TypeTag::Ice].into_iter().collect();
        let ctx = f.navigation_context(&c);
        assert_eq!(ctx.ids(), &[6, 131][..]);
        assert_eq!(ctx.source(), Provenance::Gallery);
    }
}
