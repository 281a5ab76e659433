// src/tweaks/mod.rs

pub mod announce;
pub mod declare;
pub mod values;

use announce::AnnouncementBoard;
use values::ValueRegistry;

use crate::errors::validate_label;

/// Numeric type of every tweakable parameter.
pub type TweakValue = f32;

/// Handle passed down to declaration sites while a frame is being drawn.
///
/// Gives read-only access to the live values and lets sites announce
/// themselves to the panel that owns both.
pub struct TweakContext<'a> {
    values: &'a ValueRegistry,
    board: &'a mut AnnouncementBoard,
}

impl<'a> TweakContext<'a> {
    pub fn new(values: &'a ValueRegistry, board: &'a mut AnnouncementBoard) -> Self {
        Self { values, board }
    }

    pub fn lookup(&self, label: &str) -> Option<TweakValue> {
        self.values.lookup(label)
    }

    /// The value a site declared with `initial` should render with.
    pub fn resolve(&self, label: &str, initial: TweakValue) -> TweakValue {
        self.lookup(label).unwrap_or(initial)
    }

    /// Announces a site and returns its effective value.
    pub fn declare(&mut self, label: &str, initial: TweakValue) -> TweakValue {
        if let Err(e) = validate_label(label) {
            tracing::warn!("Not announcing tweakable with default {}: {}", initial, e);
            return initial;
        }
        let value = self.resolve(label, initial);
        self.board.register(label, initial);
        value
    }
}
