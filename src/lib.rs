// Hearth XRay - block variant registry for ore outline overlays
//
// The registry is plain data plus free functions:
// - variant::store_data holds the maps and the highlight index
// - variant::store_operations transforms it
// - variant::VariantRegistry is the method facade most callers want

pub mod config;
pub mod error;
pub mod variant;

pub use config::{default_ore_entries, DefaultOreEntry, XrayConfig};
pub use error::{XrayError, XrayResult};
pub use variant::{
    create_shared_registry, resolve_default_variant, seed_defaults, seed_from_config, BlockState,
    ItemResolver, MaterialDictionary, OutlineColor, SeedReport, SharedVariantRegistry, StateId,
    VariantRecord, VariantRegistry,
};
