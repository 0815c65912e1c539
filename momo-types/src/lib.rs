//! # MoMo Types
//!
//! Wire types for the MTN Mobile Money (MoMo) open API.
//! This crate has no IO dependencies - only data structures and the URL
//! templates of each product.
//!
//! - `domain/` - Identifiers and enumerations (ReferenceId, Product, Party)
//! - `dto/` - Request and response bodies as they appear on the wire

pub mod domain;
pub mod dto;

// Re-export commonly used types
pub use domain::{Party, PartyIdType, Product, ReferenceId};
pub use dto::*;
