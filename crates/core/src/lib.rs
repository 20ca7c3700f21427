//! Mâm Cúng Việt Core - Shared types library.
//!
//! This crate provides common types used across all Mâm Cúng Việt components:
//! - `storefront` - Public-facing storefront and dashboards
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. Database codecs for the id and enum types are available behind
//! the `postgres` feature.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe ids, prices, emails, and the
//!   fixed storefront enumerations (payment method, order status, roles,
//!   delivery slots)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
