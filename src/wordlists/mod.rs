//! Candidate corpora
//!
//! The default English corpus is embedded at build time; custom lists can be
//! loaded from disk.

mod embedded;
pub mod loader;

pub use embedded::{CORPUS_EN, CORPUS_EN_COUNT};
