// Plain-text rendering of dashboard and note views
use crate::application::editor_service::OpenedNote;
use crate::domain::category::Category;
use crate::domain::dashboard::{Dashboard, NoteCard, NO_CATEGORY};
use crate::domain::date_label::label_at;
use crate::domain::profile::Profile;
use chrono::{DateTime, TimeZone};
use std::fmt::Write;

pub const EMPTY_STATE: &str = "I'm just here waiting for your charming notes...";

const ALL_CATEGORIES: &str = "All Categories";

fn marker(selected: bool) -> &'static str {
    if selected { ">" } else { " " }
}

pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut out = String::new();

    if let Some(name) = &dashboard.greeting {
        let _ = writeln!(out, "Hello, {}!\n", name);
    }

    let width = dashboard
        .categories
        .iter()
        .map(|row| row.name.chars().count())
        .chain(std::iter::once(ALL_CATEGORIES.len()))
        .max()
        .unwrap_or(0);

    let _ = writeln!(
        out,
        "{} {:<width$}  {:>3}",
        marker(dashboard.all_selected()),
        ALL_CATEGORIES,
        dashboard.all_count,
    );
    for row in &dashboard.categories {
        let _ = writeln!(
            out,
            "{} {:<width$}  {:>3}  {}  [id {}]",
            marker(row.selected),
            row.name,
            row.count,
            row.color,
            row.id,
        );
    }
    if dashboard.uncategorized_count > 0 {
        let _ = writeln!(out, "  ({} uncategorized)", dashboard.uncategorized_count);
    }
    out.push('\n');

    if dashboard.is_empty() {
        out.push_str(EMPTY_STATE);
        out.push('\n');
        return out;
    }

    for card in &dashboard.cards {
        render_card(&mut out, card);
    }
    out
}

fn render_card(out: &mut String, card: &NoteCard) {
    let _ = writeln!(out, "#{}  {}  {}", card.id, card.date_label, card.category_name);
    let _ = writeln!(out, "    {}", card.title);
    if !card.preview.is_empty() {
        let _ = writeln!(out, "    {}", card.preview);
    }
    out.push('\n');
}

pub fn render_note<Tz: TimeZone>(opened: &OpenedNote, now: &DateTime<Tz>) -> String {
    let note = &opened.note;
    let mut out = String::new();

    let category = note
        .category
        .as_ref()
        .map(|c| c.name.as_str())
        .unwrap_or(NO_CATEGORY);
    let created = label_at(note.created_at.as_deref(), now);
    let edited = label_at(note.updated_at.as_deref(), now);

    let _ = writeln!(out, "#{}  [{}]", note.id, category);
    if !created.is_empty() {
        let _ = writeln!(out, "Created:     {}", created);
    }
    if !edited.is_empty() {
        let _ = writeln!(out, "Last edited: {}", edited);
    }
    let _ = writeln!(out, "\n{}\n", note.display_title());
    let _ = writeln!(out, "{}", note.content);

    if !opened.categories.is_empty() {
        let choices: Vec<String> = opened
            .categories
            .iter()
            .map(|c| format!("{}={}", c.id, c.name))
            .collect();
        let _ = writeln!(out, "\nCategories: {}", choices.join(", "));
    }
    out
}

pub fn render_categories(categories: &[Category]) -> String {
    let mut out = String::new();
    for category in categories {
        let _ = writeln!(out, "{:>4}  {}  {}", category.id, category.color, category.name);
    }
    out
}

pub fn render_profile(profile: &Profile) -> String {
    format!(
        "Email:      {}\nFirst name: {}\nLast name:  {}\n",
        profile.username, profile.first_name, profile.last_name
    )
}
