//! # taskseed-core
//!
//! Core fixture types, canonical catalogs, and error types for taskseed.
//!
//! This crate provides the foundational types shared across all taskseed crates:
//! - Entity structs for the fixture records (categories, priorities, tasks, reminders)
//! - Status and reminder enums in the consuming application's wire spelling
//! - Document envelopes for the three emitted JSON files
//! - The canonical name catalogs and text vocabularies
//! - Cross-cutting error types

pub mod catalog;
pub mod documents;
pub mod entities;
pub mod enums;
pub mod errors;
