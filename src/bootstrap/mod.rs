//! Process startup helpers.

pub mod logger;
