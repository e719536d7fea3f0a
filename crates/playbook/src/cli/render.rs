//! Terminal rendering.
//!
//! Renderers build strings and leave printing to the caller, so tests can check
//! layout without capturing stdout. Column layout is measured in display width, not
//! bytes, since titles carry emoji and typographic punctuation.

use super::styles;
use playbookapp::commands::{CmdMessage, MessageLevel};
use playbookapp::model::{NavEntry, SearchEntry, SectionDocument};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const LABEL_WIDTH: usize = 24;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => &*styles::MUTED,
            MessageLevel::Success => &*styles::SUCCESS,
            MessageLevel::Warning => &*styles::WARNING,
        };
        out.push_str(&style.apply_to(&message.content).to_string());
        out.push('\n');
    }
    out
}

pub fn render_lines<T: std::fmt::Display>(items: &[T]) -> String {
    items.iter().map(|item| format!("{}\n", item)).collect()
}

pub fn render_nav(entries: &[NavEntry]) -> String {
    let title_width = entries
        .iter()
        .map(|e| nav_title(e).width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for entry in entries {
        let title = nav_title(entry);
        let padding = title_width.saturating_sub(title.width());
        out.push_str(&format!(
            "{:>4}  {}{}  {}\n",
            entry.order,
            styles::TITLE.apply_to(&title),
            " ".repeat(padding),
            styles::PATH.apply_to(&entry.path)
        ));
    }
    out
}

fn nav_title(entry: &NavEntry) -> String {
    if entry.emoji.is_empty() {
        entry.title.clone()
    } else {
        format!("{} {}", entry.emoji, entry.title)
    }
}

pub fn render_results(results: &[SearchEntry]) -> String {
    let mut out = String::new();
    for (i, entry) in results.iter().enumerate() {
        let prefix = format!("{:>2}. ", i + 1);
        let label = truncate_to_width(&entry.section_label, LABEL_WIDTH);
        let label_padding = LABEL_WIDTH.saturating_sub(label.width());

        let fixed = prefix.width() + LABEL_WIDTH + 2 + entry.path.width() + 2;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title = truncate_to_width(&entry.title, available);
        let title_padding = available.saturating_sub(title.width());

        out.push_str(&format!(
            "{}{}{}  {}{}  {}\n",
            prefix,
            styles::TITLE.apply_to(&title),
            " ".repeat(title_padding),
            styles::LABEL.apply_to(&label),
            " ".repeat(label_padding),
            styles::PATH.apply_to(&entry.path)
        ));
    }
    out
}

pub fn render_document(doc: &SectionDocument) -> String {
    let meta = &doc.metadata;
    let mut out = String::new();
    let heading = if meta.emoji.is_empty() {
        meta.title.clone()
    } else {
        format!("{} {}", meta.emoji, meta.title)
    };
    out.push_str(&format!("{}\n", styles::TITLE.apply_to(heading)));
    if !meta.description.is_empty() {
        out.push_str(&format!("{}\n", styles::MUTED.apply_to(&meta.description)));
    }
    out.push_str(&format!("{}\n", styles::PATH.apply_to(doc.route())));
    out.push_str(&"─".repeat(32));
    out.push('\n');
    out.push_str(&doc.body);
    if !doc.body.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width + 1 > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
