//! Core library components.
//!
//! This module contains the cleanup logic itself: process termination,
//! secret redaction, filesystem sweeps and the runner tying them together.

pub mod constants;
pub mod env;
pub mod process;
pub mod report;
pub mod runner;
pub mod sweep;
