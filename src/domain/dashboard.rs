// Dashboard domain model
use super::aggregation::{counts_by_category, filter};
use super::category::{Category, CategoryId};
use super::date_label::label_at;
use super::note::{Note, NoteId, PREVIEW_CHARS};
use super::selection::Selection;
use chrono::{DateTime, TimeZone};

pub const NO_CATEGORY: &str = "No Category";

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub id: CategoryId,
    pub name: String,
    pub color: String,
    pub count: usize,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoteCard {
    pub id: NoteId,
    pub title: String,
    pub preview: String,
    pub date_label: String,
    pub category_name: String,
    pub color: Option<String>,
}

impl NoteCard {
    fn from_note<Tz: TimeZone>(note: &Note, now: &DateTime<Tz>) -> Self {
        Self {
            id: note.id,
            title: note.display_title().to_string(),
            preview: note.preview(PREVIEW_CHARS),
            date_label: label_at(note.updated_at.as_deref(), now),
            category_name: note
                .category
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_else(|| NO_CATEGORY.to_string()),
            color: note.category.as_ref().map(|c| c.color.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub greeting: Option<String>,
    pub selection: Selection,
    pub all_count: usize,
    pub uncategorized_count: usize,
    pub categories: Vec<CategoryRow>,
    pub cards: Vec<NoteCard>,
}

impl Dashboard {
    pub fn build<Tz: TimeZone>(
        notes: &[Note],
        categories: &[Category],
        selection: Selection,
        greeting: Option<String>,
        now: &DateTime<Tz>,
    ) -> Self {
        let counts = counts_by_category(notes, categories);

        let rows = categories
            .iter()
            .map(|c| CategoryRow {
                id: c.id,
                name: c.name.clone(),
                color: c.color.clone(),
                count: counts.get(c.id),
                selected: selection.is_selected(c.id),
            })
            .collect();

        let cards = filter(notes, selection)
            .into_iter()
            .map(|note| NoteCard::from_note(note, now))
            .collect();

        Self {
            greeting,
            selection,
            all_count: counts.total(),
            uncategorized_count: counts.uncategorized(),
            categories: rows,
            cards,
        }
    }

    pub fn all_selected(&self) -> bool {
        self.selection == Selection::All
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
