//! Interactive terminal UI: prompts, spinner, and output widgets
//!
//! This module is optional and only available when the `tui` feature is
//! enabled.

pub mod keys;
pub mod prompt;
pub mod spinner;
pub mod theme;
pub mod widgets;

pub use keys::{KeyInput, ScriptedInput, TermInput};
pub use prompt::{Confirm, MultiSelect, Password, PromptError, Prompter, Select, Text};
pub use spinner::Spinner;
pub use theme::{Symbols, Theme};
