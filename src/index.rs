//! Two-level table of contents built from the flat record list.
//!
//! Records are grouped by a [`CategoryKey`] derived from the major segment of
//! their id and the category part of their title. Categories are ordered by
//! the composite string `"<major>-<title>"`; items keep collection order.

use crate::defaults::{CATEGORY_SEPARATOR, ID_SEPARATOR};
use crate::{FormulaRecord, RecordStore};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Grouping key parsed out of a record's id and title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryKey {
    pub major: String,
    pub title: String,
}

impl CategoryKey {
    /// Parse the key for one record.
    ///
    /// `"0-15"` / `"用語解説：極限"` gives major `"0"` and title `"用語解説"`.
    /// An id without `-` is its own major segment; a title without `：` is
    /// its own category.
    pub fn from_record(record: &FormulaRecord) -> Self {
        let major = record
            .id
            .split(ID_SEPARATOR)
            .next()
            .unwrap_or_default()
            .to_string();
        let title = record
            .title
            .split(CATEGORY_SEPARATOR)
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();
        Self { major, title }
    }

    /// `"<major>-<title>"`, the string categories are sorted by.
    pub fn composite(&self) -> String {
        format!("{}{}{}", self.major, ID_SEPARATOR, self.title)
    }

    /// `"<major>. <title>"`, shown as the category heading.
    pub fn display_title(&self) -> String {
        format!("{}. {}", self.major, self.title)
    }
}

impl Ord for CategoryKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.composite().cmp(&other.composite())
    }
}

impl PartialOrd for CategoryKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A single index entry that selects a record when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpTarget {
    pub id: String,
    pub index: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationCategory {
    pub key: CategoryKey,
    pub display_title: String,
    pub items: Vec<JumpTarget>,
}

/// The complete table of contents, categories in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormulaIndex {
    pub categories: Vec<NavigationCategory>,
}

impl FormulaIndex {
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate every jump target, category by category.
    pub fn targets(&self) -> impl Iterator<Item = &JumpTarget> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }
}

/// Build the index once for a freshly loaded store.
pub fn build_index(store: &RecordStore) -> FormulaIndex {
    // Keyed by composite string so two keys that render identically merge
    let mut grouped: BTreeMap<String, NavigationCategory> = BTreeMap::new();

    for (index, record) in store.records().iter().enumerate() {
        let key = CategoryKey::from_record(record);
        let category = grouped
            .entry(key.composite())
            .or_insert_with(|| NavigationCategory {
                display_title: key.display_title(),
                key,
                items: Vec::new(),
            });
        category.items.push(JumpTarget {
            id: record.id.clone(),
            index,
            label: record.heading(),
        });
    }

    FormulaIndex {
        categories: grouped.into_values().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    fn sample_store() -> RecordStore {
        RecordStore::new(vec![
            record("0-01", "用語解説：A"),
            record("0-02", "用語解説：B"),
            record("1-01", "公式：C"),
        ])
    }

    #[test]
    fn groups_into_sorted_categories() {
        let index = build_index(&sample_store());
        assert_eq!(index.len(), 2);

        let first = &index.categories[0];
        assert_eq!(first.key.composite(), "0-用語解説");
        assert_eq!(first.display_title, "0. 用語解説");
        let ids: Vec<&str> = first.items.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["0-01", "0-02"]);

        let second = &index.categories[1];
        assert_eq!(second.key.composite(), "1-公式");
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items[0].label, "1-01: 公式：C");
        assert_eq!(second.items[0].index, 2);
    }

    #[test]
    fn category_order_ignores_collection_order() {
        let store = RecordStore::new(vec![
            record("2-01", "Z：z"),
            record("0-01", "A：a"),
            record("2-02", "Z：y"),
            record("1-01", "M：m"),
        ]);
        let index = build_index(&store);
        let keys: Vec<String> = index.categories.iter().map(|c| c.key.composite()).collect();
        assert_eq!(keys, ["0-A", "1-M", "2-Z"]);

        // items stay in collection order, not sorted by subtitle
        let last: Vec<usize> = index.categories[2].items.iter().map(|t| t.index).collect();
        assert_eq!(last, [0, 2]);
    }

    #[test]
    fn title_without_separator_is_its_own_category() {
        let key = CategoryKey::from_record(&record("3-07", "  Pythagoras  "));
        assert_eq!(key.major, "3");
        assert_eq!(key.title, "Pythagoras");
    }

    #[test]
    fn id_without_dash_uses_whole_id() {
        let key = CategoryKey::from_record(&record("intro", "概要：はじめに"));
        assert_eq!(key.major, "intro");
        assert_eq!(key.composite(), "intro-概要");
    }

    #[test]
    fn subtitle_whitespace_around_category_is_trimmed() {
        let a = CategoryKey::from_record(&record("0-01", "用語解説 ：A"));
        let b = CategoryKey::from_record(&record("0-02", "用語解説：B"));
        assert_eq!(a, b);
    }

    #[test]
    fn same_composite_from_different_ids_merges() {
        let store = RecordStore::new(vec![
            record("5-01", "統計：平均"),
            record("5-99", "統計：分散"),
        ]);
        let index = build_index(&store);
        assert_eq!(index.len(), 1);
        assert_eq!(index.categories[0].items.len(), 2);
    }

    #[test]
    fn composite_ordering_is_string_ordering() {
        // '-' sorts before digits, so "1-..." precedes "10-..."
        let store = RecordStore::new(vec![record("10-01", "A：x"), record("1-01", "Z：y")]);
        let index = build_index(&store);
        assert_eq!(index.categories[0].key.major, "1");
        assert_eq!(index.categories[1].key.major, "10");
    }

    #[test]
    fn every_record_appears_exactly_once() {
        let store = sample_store();
        let index = build_index(&store);
        let mut seen: Vec<usize> = index.targets().map(|t| t.index).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..store.len()).collect::<Vec<_>>());
    }

    #[test]
    fn empty_store_builds_empty_index() {
        assert!(build_index(&RecordStore::default()).is_empty());
    }
}
