//! Terminal colouring. Everything returns plain text when stdout is not a
//! terminal or `NO_COLOR` is set.

use is_terminal::IsTerminal;
use medidata_engine::Hue;
use owo_colors::{AnsiColors, OwoColorize};

pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

pub fn hue_color(hue: Hue) -> AnsiColors {
    match hue {
        Hue::Metabolic => AnsiColors::Magenta,
        Hue::Microbiota => AnsiColors::Cyan,
        Hue::Genetic => AnsiColors::Blue,
        Hue::Laboratory => AnsiColors::BrightYellow,
        Hue::Green => AnsiColors::Green,
        Hue::Yellow => AnsiColors::Yellow,
        Hue::Red => AnsiColors::Red,
        Hue::Gray => AnsiColors::BrightBlack,
    }
}

pub fn paint(text: &str, hue: Hue) -> String {
    if colors_enabled() {
        text.color(hue_color(hue)).to_string()
    } else {
        text.to_string()
    }
}

pub fn bold(text: &str) -> String {
    if colors_enabled() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn dim(text: &str) -> String {
    if colors_enabled() {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

pub fn command(text: &str) -> String {
    if colors_enabled() {
        text.cyan().to_string()
    } else {
        text.to_string()
    }
}

pub fn tips_heading(text: &str) -> String {
    if colors_enabled() {
        text.yellow().bold().to_string()
    } else {
        text.to_string()
    }
}
