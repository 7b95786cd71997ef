//! Filesystem-backed support modules.

pub mod config;
