//! Keystroke input sources
//!
//! Prompts read keys through the `KeyInput` trait rather than the
//! terminal directly, so the state machines can be driven by a scripted
//! key sequence in tests.

use super::prompt::PromptError;
use console::{Key, Term};
use std::collections::VecDeque;
use std::io::BufRead;

/// Source of keystrokes and buffered lines for the prompt engine.
pub trait KeyInput {
    /// Read a single key press (raw, unechoed).
    fn read_key(&mut self) -> Result<Key, PromptError>;

    /// Read one line of buffered input, without the trailing newline.
    fn read_line(&mut self) -> Result<String, PromptError>;
}

/// Whether a key press is an interrupt (Ctrl-C).
pub fn is_interrupt(key: &Key) -> bool {
    matches!(key, Key::CtrlC | Key::Char('\u{3}'))
}

/// Real terminal input: raw key capture via the terminal, line input
/// from stdin.
pub struct TermInput {
    term: Term,
}

impl TermInput {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TermInput {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyInput for TermInput {
    fn read_key(&mut self) -> Result<Key, PromptError> {
        Ok(self.term.read_key()?)
    }

    fn read_line(&mut self) -> Result<String, PromptError> {
        let mut buf = String::new();
        let read = std::io::stdin().lock().read_line(&mut buf)?;
        if read == 0 {
            // EOF on stdin aborts like an interrupt does
            return Err(PromptError::Aborted);
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(buf)
    }
}

/// Scripted input for deterministic tests: a predetermined queue of
/// keys and lines. An exhausted queue aborts the prompt.
#[derive(Default)]
pub struct ScriptedInput {
    keys: VecDeque<Key>,
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys<I: IntoIterator<Item = Key>>(mut self, keys: I) -> Self {
        self.keys.extend(keys);
        self
    }

    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }
}

impl KeyInput for ScriptedInput {
    fn read_key(&mut self) -> Result<Key, PromptError> {
        self.keys.pop_front().ok_or(PromptError::Aborted)
    }

    fn read_line(&mut self) -> Result<String, PromptError> {
        self.lines.pop_front().ok_or(PromptError::Aborted)
    }
}
