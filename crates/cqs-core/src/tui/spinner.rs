//! Animated spinner for long-running steps
//!
//! The animation runs on a background thread that shares nothing with
//! the main logic beyond the message string and a running flag. The
//! thread is joined and the line cleared before the final status prints.

use super::theme::Theme;
use console::Term;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAMES_SIMPLE: &[&str] = &["|", "/", "-", "\\"];

pub struct Spinner {
    theme: Theme,
    message: String,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    /// Start animating `message` on a background thread.
    pub fn start(theme: Theme, message: impl Into<String>) -> Self {
        let message = message.into();
        let running = Arc::new(AtomicBool::new(true));

        let frames: Vec<String> = if theme.colors_enabled() {
            FRAMES.iter().map(|f| theme.cyan(f)).collect()
        } else {
            FRAMES_SIMPLE.iter().map(|f| f.to_string()).collect()
        };

        let flag = Arc::clone(&running);
        let text = message.clone();
        let handle = std::thread::spawn(move || {
            let term = Term::stdout();
            let mut frame = 0usize;
            while flag.load(Ordering::Relaxed) {
                let _ = term.write_str(&format!("\r{} {}", frames[frame % frames.len()], text));
                frame += 1;
                std::thread::sleep(Duration::from_millis(80));
            }
        });

        Self {
            theme,
            message,
            running,
            handle: Some(handle),
        }
    }

    fn finish(&mut self, status: Option<(String, String)>) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }

        let term = Term::stdout();
        let blank = " ".repeat(self.message.chars().count() + 10);
        let _ = term.write_str(&format!("\r{}\r", blank));
        if let Some((symbol, message)) = status {
            let _ = term.write_line(&format!("{} {}", symbol, message));
        }
    }

    /// Stop and print a success line.
    pub fn succeed(mut self, message: impl Into<String>) {
        let symbol = self.theme.green(self.theme.symbols.success);
        self.finish(Some((symbol, message.into())));
    }

    /// Stop and print a failure line.
    pub fn fail(mut self, message: impl Into<String>) {
        let symbol = self.theme.red(self.theme.symbols.error);
        self.finish(Some((symbol, message.into())));
    }

    /// Stop and print a warning line.
    pub fn warn(mut self, message: impl Into<String>) {
        let symbol = self.theme.yellow(self.theme.symbols.warning);
        self.finish(Some((symbol, message.into())));
    }

    /// Stop and print an informational line.
    pub fn info(mut self, message: impl Into<String>) {
        let symbol = self.theme.blue(self.theme.symbols.info);
        self.finish(Some((symbol, message.into())));
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        // Stop animating and clear the line without printing a status
        if self.handle.is_some() {
            self.finish(None);
        }
    }
}
