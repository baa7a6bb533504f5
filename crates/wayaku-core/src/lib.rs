//! # wayaku-core
//!
//! Translation table, configuration, and error handling for the Wayaku
//! localization overlay.

pub mod config;
pub mod error;
pub mod table;
