//! Syntaxgen CLI library.
//!
//! Command implementations live here so they stay testable; the `syntaxgen`
//! binary only parses arguments and dispatches.

pub mod commands;
