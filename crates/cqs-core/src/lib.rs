//! cqs Core - Shared library for the cpp-quick-starter scaffolding CLI
//!
//! This library provides the logic behind the `cqs` binary: renaming a
//! freshly cloned cpp-quick-starter template, adding modules and
//! dependencies to an existing project, and stripping bilingual
//! documentation down to a single language.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure functions for case conversion,
//!   token substitution, project detection, manifest editing, and
//!   bilingual-marker stripping
//! - **Layer 2: Toolchain Probing** - Detection of compilers, build
//!   systems, and documentation tools on the search path
//! - **Layer 3: CLI/TUI Interface** - Interactive prompts and the
//!   command wizards built on them (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the console-based prompt engine and the
//!   interactive command module
//!
//! # Example Usage (without TUI)
//!
//! ```
//! use cqs_core::casing::NameVariants;
//!
//! let variants = NameVariants::derive("MyAwesomeLib");
//! assert_eq!(variants.snake, "my_awesome_lib");
//! assert_eq!(variants.kebab, "my-awesome-lib");
//! ```

pub mod casing;
pub mod manifest;
pub mod project;
pub mod strip;
pub mod substitute;
pub mod toolchain;

#[cfg(feature = "tui")]
pub mod commands;
#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use casing::NameVariants;
pub use project::ProjectInfo;
pub use strip::DocLang;

#[cfg(feature = "tui")]
pub use tui::{KeyInput, PromptError, Theme};

/// CLI version shown in banners and `--version` output
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");
