//! texsplit CLI library.
//!
//! This crate provides the command implementations behind the `texsplit`
//! binary: running a split and reporting it as colored text or JSON.

pub mod commands;
