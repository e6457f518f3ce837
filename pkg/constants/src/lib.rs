//! Centralized constants for the quota-watch project.
//!
//! All project-wide constant values live here.
//! Change a value in one place and it applies everywhere.

pub mod output;
pub mod paths;
pub mod quota;
