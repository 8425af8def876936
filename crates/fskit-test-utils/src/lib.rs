//! Shared test utilities for the fskit workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`mock`]: [`MockFileIo`] test double that records every call
//! - [`tree`]: [`TestTree`] builder for temporary directory trees

pub mod mock;
pub mod tree;

pub use mock::{MockArgument, MockCall, MockFileIo, MockMethod, MockResponse, MockValue};
pub use tree::{TestTree, assert_trees_equal};
