//! Identifiers and enumerations shared by every product.

pub mod party;
pub mod product;
pub mod reference;

pub use party::{Party, PartyIdType};
pub use product::Product;
pub use reference::ReferenceId;
