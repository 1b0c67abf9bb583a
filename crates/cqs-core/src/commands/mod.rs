//! Command wizards built on the prompt engine
//!
//! Each command returns `Ok(true)` on success and `Ok(false)` for a
//! user-visible failure (structural error or explicit cancellation);
//! an interrupt surfaces as `PromptError::Aborted` through the error.

mod dependency;
mod doctor;
mod info;
mod init;
mod module;
mod strip;

pub use dependency::cmd_add_dependency;
pub use doctor::cmd_doctor;
pub use info::cmd_info;
pub use init::cmd_init;
pub use module::cmd_add_module;
pub use strip::cmd_strip_language;
