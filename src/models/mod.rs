//! Core data models for spendlog
//!
//! This module contains the record type that represents one expense entry
//! and the line codec used by the storage layer.

pub mod record;

pub use record::{category_field, Record};
