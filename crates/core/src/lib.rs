//! LipoImports Core - Shared types library.
//!
//! This crate provides common types used across all LipoImports components:
//! - `store` - Local-first data layer (collections, cart, session, settings)
//! - `cli` - Command-line tools for seeding and inspecting a store
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, slugs, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
