//! Shared data model layer (structs/enums only).
//!
//! ## Purpose
//! - Keep field, result, and report types in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no I/O and no resolution logic.
//! The solve tables and the input guard live in `services/*`.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs. Keep schema-impacting
//! changes explicit and synchronized with the integration tests.

pub mod models;
