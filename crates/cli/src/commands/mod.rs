//! CLI command implementations.

pub mod login;
pub mod reset;
pub mod seed;
pub mod show;
