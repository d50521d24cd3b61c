//! Variant Store Operations - Pure DOP Functions
//!
//! Free functions over `VariantStoreData`. No hidden state, no I/O apart
//! from logging.

use super::state::{BlockState, StateId};
use super::store_data::VariantStoreData;
use super::variant_data::VariantRecord;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Write;

/// Create empty variant store data
pub fn create_variant_store<S, I>() -> VariantStoreData<S, I> {
    VariantStoreData {
        variants: HashMap::new(),
        default_keys: HashSet::new(),
        highlighted: Vec::new(),
    }
}

/// Insert a variant under `key`.
///
/// Returns `false` when the key already received a default variant, or when
/// a non-default variant with the same state is already stored. A default
/// variant always lands at the front of the key's list.
pub fn put_variant<S: BlockState, I>(
    data: &mut VariantStoreData<S, I>,
    key: &str,
    record: VariantRecord<S, I>,
) -> bool {
    if data.default_keys.contains(key) {
        log::trace!("Rejected variant for '{}': key already has a default", key);
        return false;
    }

    let is_default = record.is_default;
    let drawing = record.drawing;
    let state_id = record.state_id();

    match data.variants.get_mut(key) {
        None => {
            let mut list = VecDeque::new();
            list.push_back(record);
            data.variants.insert(key.to_string(), list);
        }
        Some(list) => {
            if is_default {
                list.push_front(record);
            } else if list.iter().any(|existing| existing.same_variant(&record)) {
                log::trace!(
                    "Rejected variant for '{}': state {} already stored",
                    key,
                    state_id
                );
                return false;
            } else {
                list.push_back(record);
            }
        }
    }

    if is_default {
        data.default_keys.insert(key.to_string());
    }

    if drawing {
        data.highlighted.push(state_id);
    }

    log::debug!(
        "Stored variant for '{}' (state {}, default: {}, drawing: {})",
        key,
        state_id,
        is_default,
        drawing
    );
    true
}

/// Flip the highlight flag of the stored variant matching `record`.
///
/// A default `record` always addresses the first variant of the key, whatever
/// instance was passed in. Otherwise the first variant with an equal state is
/// flipped. Unknown keys and unmatched variants are silently ignored.
/// Returns whether a variant was flipped.
pub fn toggle_drawing<S: BlockState, I>(
    data: &mut VariantStoreData<S, I>,
    key: &str,
    record: &VariantRecord<S, I>,
) -> bool {
    let Some(list) = data.variants.get_mut(key) else {
        log::trace!("Toggle ignored: unknown key '{}'", key);
        return false;
    };

    let target = if record.is_default {
        list.front_mut()
    } else {
        list.iter_mut().find(|existing| existing.same_variant(record))
    };

    let Some(target) = target else {
        log::trace!("Toggle ignored: no matching variant under '{}'", key);
        return false;
    };

    target.drawing = !target.drawing;
    let drawing = target.drawing;
    let state_id = target.state_id();

    update_highlighted(&mut data.highlighted, drawing, state_id);
    log::debug!("Toggled '{}' state {} -> drawing: {}", key, state_id, drawing);
    true
}

/// Append on an on-transition, drop the first occurrence on an off-transition
fn update_highlighted(highlighted: &mut Vec<StateId>, add: bool, state_id: StateId) {
    if add {
        highlighted.push(state_id);
        return;
    }

    match highlighted.iter().position(|id| *id == state_id) {
        Some(index) => {
            highlighted.remove(index);
        }
        None => log::warn!("State {} was not in the highlight index", state_id),
    }
}

/// Whether `key` ever received a default variant
pub fn has_default<S, I>(data: &VariantStoreData<S, I>, key: &str) -> bool {
    data.default_keys.contains(key)
}

/// Get every key with its variants
pub fn all_variants<S, I>(
    data: &VariantStoreData<S, I>,
) -> &HashMap<String, VecDeque<VariantRecord<S, I>>> {
    &data.variants
}

/// Get the variants of a single key, default first
pub fn variants<'a, S, I>(
    data: &'a VariantStoreData<S, I>,
    key: &str,
) -> Option<&'a VecDeque<VariantRecord<S, I>>> {
    data.variants.get(key)
}

/// Get the highlighted state ids in the order they were switched on
pub fn highlighted_state_ids<S, I>(data: &VariantStoreData<S, I>) -> &[StateId] {
    &data.highlighted
}

/// Check that the default-key cache matches the stored variants.
///
/// Every cached key must own a list whose first element is a default, and
/// no list may hold a default the cache does not know about.
pub fn verify_default_cache<S, I>(data: &VariantStoreData<S, I>) -> bool {
    data.variants.iter().all(|(key, list)| {
        let front_is_default = list.front().map_or(false, |first| first.is_default);
        let defaults = list.iter().filter(|record| record.is_default).count();
        let cached = data.default_keys.contains(key);

        defaults <= 1 && cached == front_is_default && (defaults == 0 || front_is_default)
    }) && data
        .default_keys
        .iter()
        .all(|key| data.variants.contains_key(key))
}

/// Human-readable snapshot of the store. Keys are sorted; the layout is for
/// debugging only and may change.
pub fn dump_store<S: BlockState, I>(data: &VariantStoreData<S, I>) -> String {
    let mut out = String::new();
    let rule = "----==============================================----";

    let mut keys: Vec<&String> = data.variants.keys().collect();
    keys.sort();

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "-> Variant Store");
    for key in keys {
        let _ = writeln!(out, "-> [{}]", key);
        for record in &data.variants[key] {
            let _ = writeln!(
                out,
                "---> [{}, {:?}, {}, {}]",
                record.is_default, record.state, record.outline_color, record.display_name
            );
        }
    }
    let _ = writeln!(out, "-> Highlighted");
    for id in &data.highlighted {
        let _ = writeln!(out, "---> [{}]", id);
    }
    let _ = write!(out, "{}", rule);
    out
}

/// Emit `dump_store` at debug level; skipped entirely when debug is off
pub fn log_store<S: BlockState, I>(data: &VariantStoreData<S, I>) {
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("\n{}", dump_store(data));
    }
}
