//! Service layer containing the calculation core and display helpers.
//!
//! ## Service map
//! - `resolver.rs` — CPM solve table, CTR computation, write-back rounding.
//! - `guard.rs` — numeric entry guard + deferred field parsing.
//! - `session.rs` — interactive session state transitions.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Resolvers are pure: they never mutate their inputs, only return a
//!   tagged outcome. Write-back is the session's (or the CLI handler's) job.
//! - Keep command handlers thin; delegate to services.

pub mod guard;
pub mod output;
pub mod resolver;
pub mod session;
