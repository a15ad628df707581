//! # Bank
//!
//! Recipe types shared by the server and the client.
//!
//! Everything crossing the wire lives here so both sides agree on field
//! names and status messages:
//! - [`Food`]: a stored recipe record (`id`, `name`, `recipe`)
//! - [`FoodInput`]: the raw create/update body, validated into a [`NewFood`]
//! - [`payloads`]: message bodies and the exact message strings the API sends

pub mod foods;
pub mod payloads;

pub use foods::{Food, NewFood};
pub use payloads::{DeletedFood, FoodInput, Message, SearchQuery, ValidationError};
