//! # Recipe client
//!
//! Talks to the recipe service and keeps a local copy of what it shows.
//!
//! ## Flow
//!
//! - On start, fetch the full list ([`RecipeBook::mount`])
//! - Search replaces the list with the matches; no matches is an empty list, not an error
//! - Saving creates a record, or updates the one picked with [`RecipeBook::edit`]
//! - The list is patched from each response instead of being refetched
//! - Ingredients are shown one per line, numbered, split on commas
//!
//! ## Commands
//!
//! ```sh
//! recipes-client list
//! recipes-client search ph
//! recipes-client add "Pho" "beef, noodles, broth"
//! recipes-client edit <id> "Pho Ga" "chicken, noodles, broth"
//! recipes-client delete <id>
//! ```
//!
//! The server address comes from `--base-url` or `RECIPES_API_URL`.

pub mod api;
pub mod book;
pub mod render;

pub use api::{ClientError, FoodsApi, HttpApi};
pub use book::{RecipeBook, Submitted};
