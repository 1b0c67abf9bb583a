//! Interactive prompt state machines
//!
//! Each prompt renders in place and collapses to a one-line summary on
//! commit. Selection prompts run on raw keystrokes; text and confirm
//! prompts read buffered lines. Validation failures re-prompt with an
//! inline error printed above the prompt line; Ctrl-C aborts the whole
//! command.

use super::keys::{is_interrupt, KeyInput};
use super::theme::Theme;
use console::{Key, Term};

/// Failure modes of a prompt. Validation errors never surface here;
/// they are recovered by re-prompting.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// The user interrupted the prompt (Ctrl-C or EOF). Fatal to the
    /// whole command; mapped to exit code 130 by the binary.
    #[error("aborted by user")]
    Aborted,

    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders prompts to a terminal using keystrokes from a `KeyInput`.
pub struct Prompter<I> {
    theme: Theme,
    input: I,
    term: Term,
}

impl<I: KeyInput> Prompter<I> {
    pub fn new(theme: Theme, input: I) -> Self {
        Self {
            theme,
            input,
            term: Term::stdout(),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    fn prompt_prefix(&self, message: &str, hint: &str) -> String {
        let t = &self.theme;
        let s = &t.symbols;
        let hint = if hint.is_empty() {
            String::new()
        } else {
            format!(" {}", t.dim(hint))
        };
        format!(
            "{} {}{} {} ",
            t.green(s.question),
            t.bold(message),
            hint,
            t.dim(s.pointer)
        )
    }

    /// Replace the prompt line with an inline error, leaving the cursor
    /// where the next prompt attempt will render.
    fn inline_error(&mut self, message: &str) -> Result<(), PromptError> {
        let t = &self.theme;
        let line = format!("{} {}", t.red(t.symbols.error), t.red(message));
        self.term.clear_line()?;
        self.term.move_cursor_up(1)?;
        self.term.clear_line()?;
        self.term.write_line(&line)?;
        Ok(())
    }

    /// Collapse the prompt line into a one-line summary.
    fn summarize(&mut self, message: &str, value: &str) -> Result<(), PromptError> {
        let t = &self.theme;
        let s = &t.symbols;
        self.term.move_cursor_up(1)?;
        self.term.clear_line()?;
        self.term.write_line(&format!(
            "{} {} {} {}",
            t.green(s.success),
            t.bold(message),
            t.dim(s.arrow_right),
            value
        ))?;
        Ok(())
    }
}

type Validator<'a> = Box<dyn Fn(&str) -> Result<(), String> + 'a>;

/// Single-line text entry with an optional default and validator.
pub struct Text<'a> {
    message: String,
    default: String,
    placeholder: String,
    required: bool,
    validator: Option<Validator<'a>>,
}

impl<'a> Text<'a> {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            default: String::new(),
            placeholder: String::new(),
            required: true,
            validator: None,
        }
    }

    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Allow committing an empty value.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn validate<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> Result<(), String> + 'a,
    {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn interact<I: KeyInput>(&self, ui: &mut Prompter<I>) -> Result<String, PromptError> {
        let hint = if self.default.is_empty() {
            String::new()
        } else {
            format!("({})", self.default)
        };
        let prompt = ui.prompt_prefix(&self.message, &hint);

        loop {
            ui.term.write_str(&prompt)?;
            if !self.placeholder.is_empty() && self.default.is_empty() {
                let ghost = ui.theme.dim(&self.placeholder);
                ui.term.write_str(&ghost)?;
                ui.term.move_cursor_left(self.placeholder.chars().count())?;
            }

            let mut value = ui.input.read_line()?.trim().to_string();

            if value.is_empty() {
                if !self.default.is_empty() {
                    value = self.default.clone();
                } else if self.required {
                    ui.inline_error("This field is required")?;
                    continue;
                }
            }

            if let Some(validator) = &self.validator {
                if !value.is_empty() {
                    if let Err(message) = validator(&value) {
                        ui.inline_error(&message)?;
                        continue;
                    }
                }
            }

            let display = if value.is_empty() {
                ui.theme.dim("(empty)")
            } else {
                ui.theme.cyan(&value)
            };
            ui.summarize(&self.message, &display)?;
            return Ok(value);
        }
    }
}

/// Masked input collected key-by-key.
pub struct Password {
    message: String,
    mask: char,
}

impl Password {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            mask: '*',
        }
    }

    pub fn mask(mut self, mask: char) -> Self {
        self.mask = mask;
        self
    }

    pub fn interact<I: KeyInput>(&self, ui: &mut Prompter<I>) -> Result<String, PromptError> {
        let prompt = ui.prompt_prefix(&self.message, "");
        ui.term.write_str(&prompt)?;

        let mut value = String::new();
        loop {
            let key = ui.input.read_key()?;
            if is_interrupt(&key) {
                ui.term.write_line("")?;
                return Err(PromptError::Aborted);
            }
            match key {
                Key::Enter => break,
                Key::Backspace => {
                    if value.pop().is_some() {
                        ui.term.clear_chars(1)?;
                    }
                }
                Key::Char(c) if !c.is_control() => {
                    value.push(c);
                    ui.term.write_str(&self.mask.to_string())?;
                }
                _ => {}
            }
        }

        ui.term.write_line("")?;
        let display = if value.is_empty() {
            ui.theme.dim("(empty)")
        } else {
            let masked: String = std::iter::repeat(self.mask).take(value.len().min(8)).collect();
            ui.theme.dim(&masked)
        };
        ui.summarize(&self.message, &display)?;
        Ok(value)
    }
}

/// Yes/no confirmation with a default.
pub struct Confirm {
    message: String,
    default: bool,
}

impl Confirm {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            default: true,
        }
    }

    pub fn default_value(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    pub fn interact<I: KeyInput>(&self, ui: &mut Prompter<I>) -> Result<bool, PromptError> {
        let hint = if self.default { "(Y/n)" } else { "(y/N)" };
        let prompt = ui.prompt_prefix(&self.message, hint);

        loop {
            ui.term.write_str(&prompt)?;
            let value = ui.input.read_line()?.trim().to_lowercase();

            let result = if value.is_empty() {
                self.default
            } else {
                match value.as_str() {
                    "y" | "yes" | "是" => true,
                    "n" | "no" | "否" => false,
                    _ => {
                        // Silently re-prompt on anything else
                        ui.term.move_cursor_up(1)?;
                        ui.term.clear_line()?;
                        continue;
                    }
                }
            };

            let answer = if result {
                ui.theme.green("Yes")
            } else {
                ui.theme.red("No")
            };
            ui.summarize(&self.message, &answer)?;
            return Ok(result);
        }
    }
}

/// Single selection from a list, with circular Up/Down movement.
pub struct Select {
    message: String,
    items: Vec<(String, String)>,
    initial: usize,
}

impl Select {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            items: Vec::new(),
            initial: 0,
        }
    }

    pub fn item(mut self, label: impl Into<String>, description: impl Into<String>) -> Self {
        self.items.push((label.into(), description.into()));
        self
    }

    pub fn initial(mut self, index: usize) -> Self {
        self.initial = index;
        self
    }

    fn render<I: KeyInput>(&self, ui: &mut Prompter<I>, current: usize) -> Result<(), PromptError> {
        let t = ui.theme;
        let s = &t.symbols;
        ui.term
            .write_line(&format!("{} {}", t.green(s.question), t.bold(&self.message)))?;
        for (i, (label, description)) in self.items.iter().enumerate() {
            let (pointer, label) = if i == current {
                (t.cyan(s.pointer), t.cyan(label))
            } else {
                (" ".to_string(), label.clone())
            };
            let description = if description.is_empty() {
                String::new()
            } else {
                format!(" {}", t.dim(&format!("- {}", description)))
            };
            ui.term
                .write_line(&format!("  {} {}{}", pointer, label, description))?;
        }
        Ok(())
    }

    /// Returns the committed index.
    pub fn interact<I: KeyInput>(&self, ui: &mut Prompter<I>) -> Result<usize, PromptError> {
        assert!(!self.items.is_empty(), "choices cannot be empty");
        let count = self.items.len();
        let mut current = self.initial.min(count - 1);

        self.render(ui, current)?;

        loop {
            let key = ui.input.read_key()?;
            if is_interrupt(&key) {
                return Err(PromptError::Aborted);
            }
            match key {
                Key::Enter => break,
                Key::ArrowUp => current = (current + count - 1) % count,
                Key::ArrowDown => current = (current + 1) % count,
                _ => continue,
            }
            ui.term.clear_last_lines(count + 1)?;
            self.render(ui, current)?;
        }

        ui.term.clear_last_lines(count + 1)?;
        let chosen = ui.theme.cyan(&self.items[current].0);
        ui.summarize(&self.message, &chosen)?;
        Ok(current)
    }
}

/// Multiple selection from a list. Space toggles, Enter commits once
/// the minimum selection count is met.
pub struct MultiSelect {
    message: String,
    items: Vec<String>,
    defaults: Vec<usize>,
    min: usize,
    max: Option<usize>,
}

impl MultiSelect {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            items: Vec::new(),
            defaults: Vec::new(),
            min: 0,
            max: None,
        }
    }

    pub fn item(mut self, label: impl Into<String>) -> Self {
        self.items.push(label.into());
        self
    }

    pub fn initial(mut self, defaults: &[usize]) -> Self {
        self.defaults = defaults.to_vec();
        self
    }

    pub fn min_selections(mut self, min: usize) -> Self {
        self.min = min;
        self
    }

    pub fn max_selections(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    fn render<I: KeyInput>(
        &self,
        ui: &mut Prompter<I>,
        current: usize,
        selected: &std::collections::BTreeSet<usize>,
    ) -> Result<(), PromptError> {
        let t = ui.theme;
        let s = &t.symbols;
        ui.term.write_line(&format!(
            "{} {} {}",
            t.green(s.question),
            t.bold(&self.message),
            t.dim("(space to toggle, enter to confirm)")
        ))?;
        for (i, label) in self.items.iter().enumerate() {
            let pointer = if i == current {
                t.cyan(s.pointer)
            } else {
                " ".to_string()
            };
            let checkbox = if selected.contains(&i) {
                t.green(s.success)
            } else {
                t.dim(s.circle)
            };
            let label = if i == current {
                t.cyan(label)
            } else {
                label.clone()
            };
            ui.term
                .write_line(&format!("  {} {} {}", pointer, checkbox, label))?;
        }
        Ok(())
    }

    /// Returns the committed indices in ascending order.
    pub fn interact<I: KeyInput>(&self, ui: &mut Prompter<I>) -> Result<Vec<usize>, PromptError> {
        assert!(!self.items.is_empty(), "choices cannot be empty");
        let count = self.items.len();
        let mut current = 0usize;
        let mut selected: std::collections::BTreeSet<usize> =
            self.defaults.iter().copied().collect();

        self.render(ui, current, &selected)?;

        loop {
            let key = ui.input.read_key()?;
            if is_interrupt(&key) {
                return Err(PromptError::Aborted);
            }
            match key {
                Key::Enter => {
                    // Enter is ignored (no error) below the minimum
                    if selected.len() < self.min {
                        continue;
                    }
                    break;
                }
                Key::ArrowUp => current = (current + count - 1) % count,
                Key::ArrowDown => current = (current + 1) % count,
                Key::Char(' ') => {
                    // Toggling never moves the highlighted index
                    if selected.contains(&current) {
                        selected.remove(&current);
                    } else if self.max.map_or(true, |max| selected.len() < max) {
                        selected.insert(current);
                    }
                }
                _ => continue,
            }
            ui.term.clear_last_lines(count + 1)?;
            self.render(ui, current, &selected)?;
        }

        ui.term.clear_last_lines(count + 1)?;
        let summary = if selected.is_empty() {
            ui.theme.dim("(none)")
        } else {
            let names: Vec<&str> = selected.iter().map(|&i| self.items[i].as_str()).collect();
            ui.theme.cyan(&names.join(", "))
        };
        ui.summarize(&self.message, &summary)?;
        Ok(selected.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::keys::ScriptedInput;

    fn prompter(input: ScriptedInput) -> Prompter<ScriptedInput> {
        Prompter::new(Theme::plain(), input)
    }

    #[test]
    fn test_text_returns_typed_value() {
        let mut ui = prompter(ScriptedInput::new().lines(["my-lib"]));
        let value = Text::new("Project name").interact(&mut ui).unwrap();
        assert_eq!(value, "my-lib");
    }

    #[test]
    fn test_text_empty_uses_default() {
        let mut ui = prompter(ScriptedInput::new().lines([""]));
        let value = Text::new("Project name")
            .default_value("my-awesome-lib")
            .interact(&mut ui)
            .unwrap();
        assert_eq!(value, "my-awesome-lib");
    }

    #[test]
    fn test_text_required_reprompts_until_nonempty() {
        let mut ui = prompter(ScriptedInput::new().lines(["", "", "finally"]));
        let value = Text::new("Name").interact(&mut ui).unwrap();
        assert_eq!(value, "finally");
    }

    #[test]
    fn test_text_validation_failure_recovers() {
        let mut ui = prompter(ScriptedInput::new().lines(["Bad Input!", "good_input"]));
        let value = Text::new("Module name")
            .validate(|v| {
                if crate::project::is_valid_module_name(v) {
                    Ok(())
                } else {
                    Err("invalid module name".to_string())
                }
            })
            .interact(&mut ui)
            .unwrap();
        assert_eq!(value, "good_input");
    }

    #[test]
    fn test_text_default_is_validated_too() {
        let mut ui = prompter(ScriptedInput::new().lines(["", "ok"]));
        let value = Text::new("Name")
            .default_value("BAD")
            .validate(|v| if v == "BAD" { Err("no".into()) } else { Ok(()) })
            .interact(&mut ui)
            .unwrap();
        assert_eq!(value, "ok");
    }

    #[test]
    fn test_text_exhausted_input_aborts() {
        let mut ui = prompter(ScriptedInput::new());
        let err = Text::new("Name").interact(&mut ui).unwrap_err();
        assert!(matches!(err, PromptError::Aborted));
    }

    #[test]
    fn test_password_collects_and_backspaces() {
        let keys = vec![
            Key::Char('s'),
            Key::Char('e'),
            Key::Char('x'),
            Key::Backspace,
            Key::Char('c'),
            Key::Enter,
        ];
        let mut ui = prompter(ScriptedInput::new().keys(keys));
        let value = Password::new("Token").interact(&mut ui).unwrap();
        assert_eq!(value, "sec");
    }

    #[test]
    fn test_password_ctrl_c_aborts() {
        let mut ui = prompter(ScriptedInput::new().keys([Key::Char('a'), Key::CtrlC]));
        let err = Password::new("Token").interact(&mut ui).unwrap_err();
        assert!(matches!(err, PromptError::Aborted));
    }

    #[test]
    fn test_confirm_parses_tokens() {
        for (line, expected) in [
            ("y", true),
            ("YES", true),
            ("是", true),
            ("n", false),
            ("No", false),
            ("否", false),
        ] {
            let mut ui = prompter(ScriptedInput::new().lines([line]));
            let value = Confirm::new("Proceed?").interact(&mut ui).unwrap();
            assert_eq!(value, expected, "input {:?}", line);
        }
    }

    #[test]
    fn test_confirm_empty_uses_default() {
        let mut ui = prompter(ScriptedInput::new().lines([""]));
        assert!(!Confirm::new("Reset git?")
            .default_value(false)
            .interact(&mut ui)
            .unwrap());
    }

    #[test]
    fn test_confirm_garbage_reprompts() {
        let mut ui = prompter(ScriptedInput::new().lines(["maybe", "y"]));
        assert!(Confirm::new("Proceed?").interact(&mut ui).unwrap());
    }

    #[test]
    fn test_select_commits_initial_on_enter() {
        let mut ui = prompter(ScriptedInput::new().keys([Key::Enter]));
        let index = Select::new("Build system")
            .item("CMake", "")
            .item("xmake", "")
            .item("Both", "")
            .initial(2)
            .interact(&mut ui)
            .unwrap();
        assert_eq!(index, 2);
    }

    #[test]
    fn test_select_wraps_around_both_directions() {
        let mut ui = prompter(ScriptedInput::new().keys([Key::ArrowUp, Key::Enter]));
        let index = Select::new("Pick")
            .item("a", "")
            .item("b", "")
            .item("c", "")
            .interact(&mut ui)
            .unwrap();
        assert_eq!(index, 2);

        let mut ui = prompter(ScriptedInput::new().keys([
            Key::ArrowDown,
            Key::ArrowDown,
            Key::ArrowDown,
            Key::Enter,
        ]));
        let index = Select::new("Pick")
            .item("a", "")
            .item("b", "")
            .item("c", "")
            .interact(&mut ui)
            .unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn test_select_ignores_unrelated_keys() {
        let mut ui = prompter(ScriptedInput::new().keys([
            Key::Char('x'),
            Key::Tab,
            Key::ArrowDown,
            Key::Enter,
        ]));
        let index = Select::new("Pick")
            .item("a", "")
            .item("b", "")
            .interact(&mut ui)
            .unwrap();
        assert_eq!(index, 1);
    }

    #[test]
    fn test_select_ctrl_c_aborts() {
        let mut ui = prompter(ScriptedInput::new().keys([Key::ArrowDown, Key::CtrlC]));
        let err = Select::new("Pick")
            .item("a", "")
            .item("b", "")
            .interact(&mut ui)
            .unwrap_err();
        assert!(matches!(err, PromptError::Aborted));
    }

    #[test]
    fn test_multiselect_defaults_commit_on_enter() {
        let mut ui = prompter(ScriptedInput::new().keys([Key::Enter]));
        let selected = MultiSelect::new("Features")
            .item("tests")
            .item("benchmarks")
            .item("examples")
            .initial(&[0, 2])
            .interact(&mut ui)
            .unwrap();
        assert_eq!(selected, vec![0, 2]);
    }

    #[test]
    fn test_multiselect_double_toggle_restores_selection() {
        let mut ui = prompter(ScriptedInput::new().keys([
            Key::Char(' '),
            Key::Char(' '),
            Key::Enter,
        ]));
        let selected = MultiSelect::new("Features")
            .item("a")
            .item("b")
            .initial(&[1])
            .interact(&mut ui)
            .unwrap();
        assert_eq!(selected, vec![1]);
    }

    #[test]
    fn test_multiselect_toggle_does_not_move_cursor() {
        // Toggle index 1 twice without extra arrow keys in between
        let mut ui = prompter(ScriptedInput::new().keys([
            Key::ArrowDown,
            Key::Char(' '),
            Key::Char(' '),
            Key::Char(' '),
            Key::Enter,
        ]));
        let selected = MultiSelect::new("Features")
            .item("a")
            .item("b")
            .item("c")
            .interact(&mut ui)
            .unwrap();
        assert_eq!(selected, vec![1]);
    }

    #[test]
    fn test_multiselect_enter_refused_below_minimum() {
        // First Enter is ignored; select one, then Enter commits
        let mut ui = prompter(ScriptedInput::new().keys([
            Key::Enter,
            Key::Char(' '),
            Key::Enter,
        ]));
        let selected = MultiSelect::new("Pick at least one")
            .item("a")
            .item("b")
            .min_selections(1)
            .interact(&mut ui)
            .unwrap();
        assert_eq!(selected, vec![0]);
    }

    #[test]
    fn test_multiselect_respects_max_cap() {
        let mut ui = prompter(ScriptedInput::new().keys([
            Key::Char(' '),
            Key::ArrowDown,
            Key::Char(' '),
            Key::Enter,
        ]));
        let selected = MultiSelect::new("Pick one only")
            .item("a")
            .item("b")
            .max_selections(1)
            .interact(&mut ui)
            .unwrap();
        assert_eq!(selected, vec![0]);
    }
}
