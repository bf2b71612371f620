//! Cli for classifying a day of file activity into a mood. Files you touched
//! during a day are recorded into a local log, and a small set of
//! extension-based rules turns them into one of a few mood categories.
//!

pub mod cli;
pub mod mood;
pub mod storage;
pub mod utils;
