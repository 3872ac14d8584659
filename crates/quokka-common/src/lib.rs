//! Common utilities for the Quokka selector toolkit.
//!
//! This crate provides shared infrastructure used by all toolkit components:
//! - **Warning System** - colored terminal output for permissive-input diagnostics

pub mod warning;
