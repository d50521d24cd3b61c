//! Variant Data
//!
//! One concrete block variant as stored in the registry.

use super::outline_color::OutlineColor;
use super::state::{BlockState, StateId};

/// A renderable variant of a registry key.
///
/// `item_stack` is carried along for display code and never inspected here.
#[derive(Debug, Clone)]
pub struct VariantRecord<S, I> {
    /// Owning registry key (the block's canonical identifier)
    pub key: String,
    pub display_name: String,
    pub outline_color: OutlineColor,
    /// Canonical variant for its key; always stored first
    pub is_default: bool,
    pub state: S,
    pub item_stack: I,
    /// Currently highlighted
    pub drawing: bool,
}

impl<S: BlockState, I> VariantRecord<S, I> {
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        outline_color: OutlineColor,
        is_default: bool,
        state: S,
        item_stack: I,
        drawing: bool,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            outline_color,
            is_default,
            state,
            item_stack,
            drawing,
        }
    }

    pub fn state_id(&self) -> StateId {
        self.state.state_id()
    }

    /// Same block state, whatever the other fields say
    pub fn same_variant(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<S: BlockState, I> PartialEq for VariantRecord<S, I> {
    fn eq(&self, other: &Self) -> bool {
        self.same_variant(other)
    }
}
