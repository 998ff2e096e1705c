//! Utility modules: build info and config-file helpers.

pub mod build_info;
pub mod persistence;
