//! Shared test utilities for the fmrc-tools workspace.
//!
//! Provides generators for synthetic coordinate structures shaped like real
//! forecast collections, so test cases can be stated in terms of run
//! schedules and offset axes instead of hand-built structs.
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod generators;

pub use generators::*;
