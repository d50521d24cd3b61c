//! Fixtures shared by the variant tests

use super::outline_color::OutlineColor;
use super::state::{BlockState, StateId};
use super::variant_data::VariantRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct TestState(pub u32);

impl BlockState for TestState {
    fn state_id(&self) -> StateId {
        StateId(self.0)
    }
}

pub fn record(state: u32, is_default: bool, drawing: bool) -> VariantRecord<TestState, ()> {
    VariantRecord::new(
        "test:ore",
        format!("Variant {}", state),
        OutlineColor::new(1, 2, 3),
        is_default,
        TestState(state),
        (),
        drawing,
    )
}
