//! Judging domain
//!
//! The judge answers in terms of sides (`pro`/`con`/`draw`); [`mapping`]
//! turns that into the session's own winner and a stats change.

pub mod mapping;
pub mod verdict;

pub use mapping::{JudgedOutcome, map_verdict};
pub use verdict::{Score, Verdict, VerdictWinner, verdict_schema};
