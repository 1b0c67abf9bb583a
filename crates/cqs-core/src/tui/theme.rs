//! Rendering capability object
//!
//! A `Theme` is decided once at startup (flags, environment, tty-ness)
//! and passed to every renderer; there is no process-wide color state.

use console::{style, StyledObject};
use std::env;

/// Symbols used across prompts and widgets, with an ASCII fallback for
/// dumb terminals.
#[derive(Debug, Clone, Copy)]
pub struct Symbols {
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
    pub question: &'static str,
    pub pointer: &'static str,
    pub arrow_right: &'static str,
    pub bullet: &'static str,
    pub circle: &'static str,
    pub line: &'static str,
    pub vertical: &'static str,
    pub corner_tl: &'static str,
    pub corner_tr: &'static str,
    pub corner_bl: &'static str,
    pub corner_br: &'static str,
}

const UNICODE_SYMBOLS: Symbols = Symbols {
    success: "✔",
    error: "✖",
    warning: "⚠",
    info: "ℹ",
    question: "?",
    pointer: "❯",
    arrow_right: "→",
    bullet: "●",
    circle: "○",
    line: "─",
    vertical: "│",
    corner_tl: "┌",
    corner_tr: "┐",
    corner_bl: "└",
    corner_br: "┘",
};

const ASCII_SYMBOLS: Symbols = Symbols {
    success: "[OK]",
    error: "[X]",
    warning: "[!]",
    info: "[i]",
    question: "[?]",
    pointer: ">",
    arrow_right: "->",
    bullet: "*",
    circle: "o",
    line: "-",
    vertical: "|",
    corner_tl: "+",
    corner_tr: "+",
    corner_bl: "+",
    corner_br: "+",
};

/// Immutable rendering configuration threaded through every prompt,
/// spinner, and widget.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    colors: bool,
    pub symbols: Symbols,
}

impl Theme {
    /// Decide color support from the `--no-color` flag, the `NO_COLOR`
    /// and `FORCE_COLOR` environment variables, and tty-ness.
    pub fn auto(no_color_flag: bool) -> Self {
        let colors = if no_color_flag || env::var_os("NO_COLOR").is_some() {
            false
        } else if env::var_os("FORCE_COLOR").is_some() {
            true
        } else {
            console::user_attended()
        };
        Self::with_colors(colors)
    }

    pub fn with_colors(colors: bool) -> Self {
        Self {
            colors,
            symbols: if colors { UNICODE_SYMBOLS } else { ASCII_SYMBOLS },
        }
    }

    /// Colorless theme with ASCII symbols, used in tests.
    pub fn plain() -> Self {
        Self::with_colors(false)
    }

    pub fn colors_enabled(&self) -> bool {
        self.colors
    }

    fn paint<F>(&self, text: &str, f: F) -> String
    where
        F: FnOnce(StyledObject<&str>) -> StyledObject<&str>,
    {
        if self.colors {
            f(style(text)).force_styling(true).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn red(&self, text: &str) -> String {
        self.paint(text, |s| s.red())
    }

    pub fn green(&self, text: &str) -> String {
        self.paint(text, |s| s.green())
    }

    pub fn yellow(&self, text: &str) -> String {
        self.paint(text, |s| s.yellow())
    }

    pub fn blue(&self, text: &str) -> String {
        self.paint(text, |s| s.blue())
    }

    pub fn magenta(&self, text: &str) -> String {
        self.paint(text, |s| s.magenta())
    }

    pub fn cyan(&self, text: &str) -> String {
        self.paint(text, |s| s.cyan())
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, |s| s.dim())
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, |s| s.bold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_passes_text_through() {
        let theme = Theme::plain();
        assert_eq!(theme.cyan("hello"), "hello");
        assert_eq!(theme.bold("hello"), "hello");
        assert_eq!(theme.symbols.success, "[OK]");
    }

    #[test]
    fn test_colored_theme_emits_ansi() {
        let theme = Theme::with_colors(true);
        let out = theme.cyan("hello");
        assert!(out.contains("hello"));
        assert!(out.starts_with('\u{1b}'));
        assert_eq!(theme.symbols.success, "✔");
    }
}
