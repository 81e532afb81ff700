//! Shared test utilities for the Lexis workspace.
//!
//! This crate is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`bundle`]: [`TestBundle`] builder for on-disk resource bundles

pub mod bundle;

pub use bundle::{BundleFixture, TestBundle};
