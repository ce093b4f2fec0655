//! # taskseed-gen
//!
//! Fixture fabrication for the task-management application.
//!
//! - [`fabricate::Fabricator`] builds a [`FixtureSet`] from a
//!   [`GenerationConfig`](taskseed_config::GenerationConfig), a reference date,
//!   and an explicitly passed RNG
//! - [`sink`] writes the three documents to every configured directory and
//!   reports each directory independently
//! - [`check`] loads an emitted directory back and audits it against the
//!   consuming application's load rules
//!
//! All randomness flows through the RNG handed to the fabricator; seeding it
//! with [`rng::seeded`] makes a run reproducible.

pub mod check;
pub mod error;
pub mod fabricate;
pub mod pool;
pub mod reminders;
pub mod rng;
pub mod schedule;
pub mod sink;
pub mod text;

pub use error::{CheckError, GenerateError, PoolError, SinkError};
pub use taskseed_core::documents::FixtureSet;
