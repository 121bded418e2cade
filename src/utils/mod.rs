//! Utility modules shared across the application.
//!
//! Currently this is date/time handling: relative "time ago" strings for
//! feeds and comments, and the absolute formats used in the header and the
//! task inspector.

pub mod datetime;
