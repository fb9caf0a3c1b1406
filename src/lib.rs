//! Idea Spark: seeded generation of headline angles and next steps.
//!
//! Given a topic, a tone and an optional audience, shuffles tone-specific
//! template pools with a Mersenne Twister seeded from an MD5 digest of the
//! inputs, so the same request always yields the same report.

pub mod cli;
pub mod core;
pub mod schema;
