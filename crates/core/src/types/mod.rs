//! Core types for Mâm Cúng Việt.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod money;
pub mod slot;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use money::Vnd;
pub use slot::{DeliverySlot, DeliverySlotError};
pub use status::*;
