//! Terminal styling helpers for CLI output.

use std::io::IsTerminal;

use owo_colors::{OwoColorize, Style};

fn paint(text: impl AsRef<str>, style: Style) -> String {
    let text = text.as_ref();
    if std::io::stdout().is_terminal() {
        format!("{}", text.style(style))
    } else {
        text.to_string()
    }
}

pub fn ok(text: impl AsRef<str>) -> String {
    paint(text, Style::new().green())
}

pub fn warn(text: impl AsRef<str>) -> String {
    paint(text, Style::new().yellow())
}

pub fn err(text: impl AsRef<str>) -> String {
    paint(text, Style::new().red())
}

pub fn accent(text: impl AsRef<str>) -> String {
    paint(text, Style::new().cyan())
}
