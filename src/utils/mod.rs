//! Shared Infrastructure Utilities

pub mod interner;
