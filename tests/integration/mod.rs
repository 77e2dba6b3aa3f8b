//! Integration test modules for sfe

pub mod catalog;
pub mod logging;
