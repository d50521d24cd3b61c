//! Block variant registry
//!
//! Maps a block key to its variants (default first) and keeps the flat
//! highlight index the renderer culls against.

mod dictionary;
mod outline_color;
mod seeding;
mod state;
mod store;
mod variant_data;

pub mod store_data;
pub mod store_operations;

#[cfg(test)]
mod test_support;

pub use dictionary::{resolve_default_variant, ItemResolver, MaterialDictionary};
pub use outline_color::OutlineColor;
pub use seeding::{seed_defaults, seed_from_config, SeedReport};
pub use state::{BlockState, StateId};
pub use store::{create_shared_registry, SharedVariantRegistry, VariantRegistry};
pub use store_data::VariantStoreData;
pub use variant_data::VariantRecord;
