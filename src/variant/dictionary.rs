//! Material dictionary lookups
//!
//! Resolves a generic material name (an ore tag such as `oreIron`) into the
//! default variant of the first block registered under it. The host supplies
//! both collaborators; nothing here touches the registry.

use super::outline_color::OutlineColor;
use super::state::BlockState;
use super::variant_data::VariantRecord;

/// Host dictionary mapping material tags to item instances
pub trait MaterialDictionary {
    type Item;

    /// All items tagged with `name`, in the host's order
    fn lookup(&self, name: &str) -> Vec<Self::Item>;
}

/// Host item and block resolution
pub trait ItemResolver {
    type Item;
    type State: BlockState;

    /// Whether `item` is the host's empty/no-op stack
    fn is_empty_item(&self, item: &Self::Item) -> bool;

    /// Canonical identifier of the item's block, used as the registry key
    fn registry_name(&self, item: &Self::Item) -> String;

    fn display_name(&self, item: &Self::Item) -> String;

    /// Default state of the block the item places
    fn default_state(&self, item: &Self::Item) -> Self::State;
}

/// Build the default variant for the first item tagged `name`.
///
/// `None` when nothing is registered under the tag or the first entry is the
/// empty sentinel, which is normal when the providing mod is not installed.
pub fn resolve_default_variant<D, R>(
    dictionary: &D,
    resolver: &R,
    name: &str,
    color: OutlineColor,
    draw: bool,
) -> Option<VariantRecord<R::State, D::Item>>
where
    D: MaterialDictionary,
    R: ItemResolver<Item = D::Item>,
{
    let item = dictionary.lookup(name).into_iter().next()?;
    if resolver.is_empty_item(&item) {
        log::debug!("Dictionary entry '{}' resolved to an empty item", name);
        return None;
    }

    Some(VariantRecord::new(
        resolver.registry_name(&item),
        resolver.display_name(&item),
        color,
        true,
        resolver.default_state(&item),
        item,
        draw,
    ))
}


#[cfg(test)]
mod tests {
    use super::fake::{item, FakeDictionary, FakeItem, FakeResolver};
    use super::*;
    use crate::variant::test_support::TestState;

    #[test]
    fn test_resolves_first_item() {
        let dictionary = FakeDictionary::default().with(
            "oreIron",
            vec![
                item("minecraft:iron_ore", "Iron Ore", 15),
                item("othermod:iron_ore", "Other Iron Ore", 900),
            ],
        );
        let color = OutlineColor::new(170, 117, 37);

        let record = resolve_default_variant(&dictionary, &FakeResolver, "oreIron", color, true)
            .expect("iron ore should resolve");

        assert_eq!(record.key, "minecraft:iron_ore");
        assert_eq!(record.display_name, "Iron Ore");
        assert_eq!(record.state, TestState(15));
        assert_eq!(record.outline_color, color);
        assert_eq!(record.item_stack, item("minecraft:iron_ore", "Iron Ore", 15));
        assert!(record.is_default);
        assert!(record.drawing);
    }

    #[test]
    fn test_missing_or_empty_entries_resolve_to_none() {
        let dictionary = FakeDictionary::default()
            .with("oreEmpty", vec![])
            .with("oreSentinel", vec![FakeItem(None), item("mod:ore", "Ore", 3)]);
        let color = OutlineColor::default();

        assert!(resolve_default_variant(&dictionary, &FakeResolver, "oreCopper", color, false).is_none());
        assert!(resolve_default_variant(&dictionary, &FakeResolver, "oreEmpty", color, false).is_none());
        assert!(resolve_default_variant(&dictionary, &FakeResolver, "oreSentinel", color, false).is_none());
    }
}
