//! Command implementations behind `lipo-cli`.
//!
//! The binary in `main.rs` only parses arguments; the command bodies live
//! here so the integration-test crate can drive them directly against a
//! temporary data directory.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod commands;
