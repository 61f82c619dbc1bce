//! Clause catalogue and keyword matching.
//!
//! - [`catalogue`]: the static table of monitored clause categories with their
//!   Portuguese/English keyword variants and risk tiers.
//! - [`matcher`]: sentence splitting and the first-keyword, first-sentence
//!   matching routine that turns a document into [`ClauseHit`](crate::models::ClauseHit)s.

pub mod catalogue;
pub mod matcher;
