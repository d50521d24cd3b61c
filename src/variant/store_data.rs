//! Variant Store Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in store_operations.rs

use super::state::StateId;
use super::variant_data::VariantRecord;
use std::collections::{HashMap, HashSet, VecDeque};

/// Registry data for block variants and their highlight state
pub struct VariantStoreData<S, I> {
    /// Map from registry key to its variants, default first
    pub variants: HashMap<String, VecDeque<VariantRecord<S, I>>>,
    /// Keys that received a default variant. Write-through on insert, never pruned.
    pub default_keys: HashSet<String>,
    /// State ids currently highlighted, in toggle order
    pub highlighted: Vec<StateId>,
}
