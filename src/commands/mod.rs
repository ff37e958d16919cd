//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `calc.rs` — one-shot cpm/ctr/check commands.
//! - `session.rs` — the interactive line-driven session.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate resolution logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod calc;
pub mod session;

pub use calc::{handle_check, handle_cpm, handle_ctr};
pub use session::handle_session;
