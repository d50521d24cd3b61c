use super::state::{BlockState, StateId};
use super::store_data::VariantStoreData;
use super::store_operations;
use super::variant_data::VariantRecord;
use parking_lot::RwLock;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

/// Registry of block variants and the highlight index read by the renderer.
///
/// Not synchronised: mutate from one owner. Use `SharedVariantRegistry` when a
/// render thread reads while another thread toggles.
pub struct VariantRegistry<S, I> {
    data: VariantStoreData<S, I>,
}

/// Registry behind a single lock for cross-thread access
pub type SharedVariantRegistry<S, I> = Arc<RwLock<VariantRegistry<S, I>>>;

impl<S: BlockState, I> VariantRegistry<S, I> {
    pub fn new() -> Self {
        Self {
            data: store_operations::create_variant_store(),
        }
    }

    /// Insert a variant; `false` when rejected
    pub fn put_variant(&mut self, key: &str, record: VariantRecord<S, I>) -> bool {
        store_operations::put_variant(&mut self.data, key, record)
    }

    /// Flip the highlight flag of the matching variant, if any
    pub fn toggle_drawing(&mut self, key: &str, record: &VariantRecord<S, I>) -> bool {
        store_operations::toggle_drawing(&mut self.data, key, record)
    }

    pub fn has_default(&self, key: &str) -> bool {
        store_operations::has_default(&self.data, key)
    }

    pub fn all_variants(&self) -> &HashMap<String, VecDeque<VariantRecord<S, I>>> {
        store_operations::all_variants(&self.data)
    }

    pub fn variants(&self, key: &str) -> Option<&VecDeque<VariantRecord<S, I>>> {
        store_operations::variants(&self.data, key)
    }

    pub fn highlighted_state_ids(&self) -> &[StateId] {
        store_operations::highlighted_state_ids(&self.data)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.data.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.variants.is_empty()
    }

    pub fn verify_default_cache(&self) -> bool {
        store_operations::verify_default_cache(&self.data)
    }

    pub fn dump(&self) -> String {
        store_operations::dump_store(&self.data)
    }

    /// Log the dump at debug level
    pub fn log_store(&self) {
        store_operations::log_store(&self.data)
    }
}

impl<S: BlockState, I> Default for VariantRegistry<S, I> {
    fn default() -> Self {
        Self::new()
    }
}

/// Create an empty registry behind a shared lock
pub fn create_shared_registry<S: BlockState, I>() -> SharedVariantRegistry<S, I> {
    Arc::new(RwLock::new(VariantRegistry::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::test_support::{record, TestState};

    #[test]
    fn test_registry_facade() {
        let mut registry: VariantRegistry<TestState, ()> = VariantRegistry::new();
        assert!(registry.is_empty());

        assert!(registry.put_variant("ore", record(1, false, false)));
        assert!(registry.put_variant("ore", record(2, true, true)));
        assert!(registry.toggle_drawing("ore", &record(1, false, false)));

        assert_eq!(registry.len(), 1);
        assert!(registry.has_default("ore"));
        assert_eq!(registry.highlighted_state_ids(), &[StateId(2), StateId(1)]);
        assert_eq!(registry.all_variants()["ore"].len(), 2);
        assert!(registry.verify_default_cache());
        assert!(registry.dump().contains("-> [ore]"));
    }

    #[test]
    fn test_shared_registry_across_threads() {
        let shared = create_shared_registry::<TestState, ()>();
        shared.write().put_variant("ore", record(3, false, false));

        let writer = Arc::clone(&shared);
        std::thread::spawn(move || {
            writer.write().toggle_drawing("ore", &record(3, false, false));
        })
        .join()
        .expect("toggle thread panicked");

        assert_eq!(shared.read().highlighted_state_ids(), &[StateId(3)]);
    }
}
