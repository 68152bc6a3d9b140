//! Test fixtures providing reusable seed data.
//!
//! Unlike factories, fixtures insert fixed reference data that the migrations would
//! normally seed, since test schemas are generated from entities rather than migrated.

pub mod preference;
