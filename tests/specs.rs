//! Behavioral specifications for the fsh command language.
//!
//! These tests are black-box: they drive the public `fsh-shell` API against
//! an in-memory filesystem and check the observable results.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[macro_use]
extern crate similar_asserts;

#[path = "specs/prelude.rs"]
mod prelude;

#[path = "specs/language.rs"]
mod language;

#[path = "specs/compiler.rs"]
mod compiler;

#[path = "specs/execution.rs"]
mod execution;
