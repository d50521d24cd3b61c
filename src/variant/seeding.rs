//! Seeds a registry with default variants from material dictionary tags

use super::dictionary::{resolve_default_variant, ItemResolver, MaterialDictionary};
use super::store::VariantRegistry;
use crate::config::{DefaultOreEntry, XrayConfig};

/// Outcome of a seeding pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    /// Tag had no usable item (mod not installed)
    pub unresolved: usize,
    /// Registry refused the variant, usually because the key already had a default
    pub rejected: usize,
}

/// Resolve each entry and insert it as its key's default variant
pub fn seed_defaults<D, R>(
    registry: &mut VariantRegistry<R::State, D::Item>,
    dictionary: &D,
    resolver: &R,
    entries: &[DefaultOreEntry],
) -> SeedReport
where
    D: MaterialDictionary,
    R: ItemResolver<Item = D::Item>,
{
    let mut report = SeedReport::default();

    for entry in entries {
        let Some(record) = resolve_default_variant(
            dictionary,
            resolver,
            &entry.dictionary_name,
            entry.outline_color(),
            entry.draw,
        ) else {
            log::debug!("No block registered for '{}'", entry.dictionary_name);
            report.unresolved += 1;
            continue;
        };

        let key = record.key.clone();
        if registry.put_variant(&key, record) {
            report.inserted += 1;
        } else {
            report.rejected += 1;
        }
    }

    log::info!(
        "Seeded default variants: {} inserted, {} unresolved, {} rejected",
        report.inserted,
        report.unresolved,
        report.rejected
    );
    report
}

/// Seed from the configured ore table, dumping the store afterwards if asked
pub fn seed_from_config<D, R>(
    registry: &mut VariantRegistry<R::State, D::Item>,
    dictionary: &D,
    resolver: &R,
    config: &XrayConfig,
) -> SeedReport
where
    D: MaterialDictionary,
    R: ItemResolver<Item = D::Item>,
{
    let report = seed_defaults(registry, dictionary, resolver, &config.default_ores);
    if config.dump_after_seed {
        registry.log_store();
    }
    report
}
