//! Console styles shared by the renderers.
//!
//! Code refers to styles by meaning (`muted`, `title`), never by color, so the
//! palette can change in one place. `console` drops the escape codes when stdout is
//! not a terminal.

use console::Style;
use once_cell::sync::Lazy;

pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static PATH: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static LABEL: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow().bold());
