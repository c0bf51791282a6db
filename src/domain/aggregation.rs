// Per-category note counts and selection filtering
use super::category::{Category, CategoryId};
use super::note::Note;
use super::selection::Selection;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryCounts {
    counts: HashMap<CategoryId, usize>,
    total: usize,
}

impl CategoryCounts {
    /// Count for a category; 0 for ids that were not loaded.
    pub fn get(&self, id: CategoryId) -> usize {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    /// Every note, categorized or not.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn categorized(&self) -> usize {
        self.counts.values().sum()
    }

    /// Notes without a category or pointing at a category that is not loaded.
    pub fn uncategorized(&self) -> usize {
        self.total - self.categorized()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Count notes per loaded category. Every category gets an entry, even at 0.
pub fn counts_by_category(notes: &[Note], categories: &[Category]) -> CategoryCounts {
    let mut counts: HashMap<CategoryId, usize> =
        categories.iter().map(|c| (c.id, 0)).collect();

    for note in notes {
        if let Some(count) = note.category_id().and_then(|id| counts.get_mut(&id)) {
            *count += 1;
        }
    }

    CategoryCounts {
        counts,
        total: notes.len(),
    }
}

/// Notes visible under `selection`, in their original order.
pub fn filter(notes: &[Note], selection: Selection) -> Vec<&Note> {
    notes
        .iter()
        .filter(|note| selection.matches(note.category_id()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::note::NoteId;

    fn categories() -> Vec<Category> {
        vec![
            Category::new(CategoryId(1), "Random Thoughts".to_string(), "#FFCBCB".to_string()),
            Category::new(CategoryId(2), "School".to_string(), "#FFF176".to_string()),
            Category::new(CategoryId(3), "Personal".to_string(), "#AFC7BD".to_string()),
        ]
    }

    fn note(id: i64, category: Option<i64>) -> Note {
        let category = category.map(|c| {
            Category::new(CategoryId(c), format!("cat {}", c), "#FFFFFF".to_string())
        });
        Note::new(NoteId(id), format!("note {}", id), String::new(), category)
    }

    fn notes() -> Vec<Note> {
        vec![note(10, Some(1)), note(11, Some(2)), note(12, Some(1)), note(13, None)]
    }

    #[test]
    fn test_counts_by_category() {
        let counts = counts_by_category(&notes(), &categories());

        assert_eq!(counts.get(CategoryId(1)), 2);
        assert_eq!(counts.get(CategoryId(2)), 1);
        assert_eq!(counts.get(CategoryId(3)), 0);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.categorized(), 3);
        assert_eq!(counts.uncategorized(), 1);
    }

    #[test]
    fn test_unknown_category_counts_as_uncategorized() {
        let notes = vec![note(1, Some(1)), note(2, Some(42))];
        let counts = counts_by_category(&notes, &categories());

        assert_eq!(counts.get(CategoryId(42)), 0);
        assert_eq!(counts.categorized(), 1);
        assert_eq!(counts.uncategorized(), 1);
    }

    #[test]
    fn test_duplicate_categories_do_not_double_count() {
        let mut categories = categories();
        categories.push(categories[0].clone());
        let counts = counts_by_category(&notes(), &categories);

        assert_eq!(counts.get(CategoryId(1)), 2);
        assert!(counts.categorized() <= counts.total());
    }

    #[test]
    fn test_empty_inputs() {
        let counts = counts_by_category(&[], &categories());
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.get(CategoryId(1)), 0);

        let counts = counts_by_category(&notes(), &[]);
        assert!(counts.is_empty());
        assert_eq!(counts.uncategorized(), 4);

        assert!(filter(&[], Selection::All).is_empty());
    }

    #[test]
    fn test_filter_all_returns_every_note_in_order() {
        let notes = notes();
        let filtered = filter(&notes, Selection::All);
        let ids: Vec<i64> = filtered.iter().map(|n| n.id.0).collect();
        assert_eq!(ids, vec![10, 11, 12, 13]);
    }

    #[test]
    fn test_filter_by_category_matches_count() {
        let notes = notes();
        let counts = counts_by_category(&notes, &categories());

        for category in categories() {
            let filtered = filter(&notes, Selection::Category(category.id));
            assert_eq!(filtered.len(), counts.get(category.id));
            assert!(filtered.iter().all(|n| n.category_id() == Some(category.id)));
        }
    }

    #[test]
    fn test_filter_with_parsed_selection() {
        let notes = notes();
        let selection: Selection = "1".parse().unwrap();
        let ids: Vec<i64> = filter(&notes, selection).iter().map(|n| n.id.0).collect();
        assert_eq!(ids, vec![10, 12]);
    }
}
