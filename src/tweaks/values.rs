// src/tweaks/values.rs

use std::{
    collections::{BTreeMap, HashSet},
    ops::RangeInclusive,
};

use crossbeam::channel::{self, Receiver, Sender};

use super::TweakValue;
use crate::{
    constants::{VALUE_MAX, VALUE_MIN},
    errors::TweakError,
};

/// Notification sent to subscribers whenever a stored value changes.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueEvent {
    Changed { label: String, value: TweakValue },
    /// The whole snapshot was rebuilt from announced defaults.
    Reset,
}

/// The live label -> value store read by every declaration site.
///
/// Only the panel writes into it; declaration sites get a shared reference
/// through [`TweakContext`](super::TweakContext).
#[derive(Debug)]
pub struct ValueRegistry {
    values: BTreeMap<String, TweakValue>,
    /// Labels whose value came from a slider rather than an announcement.
    edited: HashSet<String>,
    range: RangeInclusive<TweakValue>,
    subscribers: Vec<Sender<ValueEvent>>,
}

impl Default for ValueRegistry {
    fn default() -> Self {
        Self::new(VALUE_MIN..=VALUE_MAX)
    }
}

impl ValueRegistry {
    pub fn new(range: RangeInclusive<TweakValue>) -> Self {
        Self {
            values: BTreeMap::new(),
            edited: HashSet::new(),
            range,
            subscribers: Vec::new(),
        }
    }

    /// Returns the current value for `label`, or `None` if it was never registered.
    pub fn lookup(&self, label: &str) -> Option<TweakValue> {
        self.values.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.values.contains_key(label)
    }

    /// Labels in natural string order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn range(&self) -> RangeInclusive<TweakValue> {
        self.range.clone()
    }

    pub fn is_edited(&self, label: &str) -> bool {
        self.edited.contains(label)
    }

    pub fn snapshot(&self) -> BTreeMap<String, TweakValue> {
        self.values.clone()
    }

    /// Registers a listener for value changes. Dropped receivers are pruned
    /// on the next notification.
    pub fn subscribe(&mut self) -> Receiver<ValueEvent> {
        let (sender, receiver) = channel::unbounded();
        self.subscribers.push(sender);
        receiver
    }

    /// Stores a user edit. The value is clamped to the configured range and
    /// the clamped value is returned.
    pub(crate) fn set(&mut self, label: &str, value: TweakValue) -> Result<TweakValue, TweakError> {
        if !value.is_finite() {
            return Err(TweakError::InvalidValue {
                label: label.to_string(),
                value,
            });
        }
        let clamped = self.clamp(value);
        let slot = self
            .values
            .get_mut(label)
            .ok_or_else(|| TweakError::UnknownLabel(label.to_string()))?;

        self.edited.insert(label.to_string());
        if *slot != clamped {
            *slot = clamped;
            tracing::debug!("Tweak '{}' set to {}", label, clamped);
            self.notify(ValueEvent::Changed {
                label: label.to_string(),
                value: clamped,
            });
        }
        Ok(clamped)
    }

    /// Replaces the whole snapshot with `announced`, discarding every edit.
    pub(crate) fn replace_all(&mut self, announced: BTreeMap<String, TweakValue>) {
        let (min, max) = (*self.range.start(), *self.range.end());
        self.values = announced
            .into_iter()
            .map(|(label, value)| (label, value.clamp(min, max)))
            .collect();
        self.edited.clear();
        tracing::debug!("Replaced tweak values with {} announced defaults", self.values.len());
        self.notify(ValueEvent::Reset);
    }

    /// Folds `announced` into the snapshot without touching edited values.
    /// Labels missing from `announced` are kept.
    pub(crate) fn merge_defaults(&mut self, announced: BTreeMap<String, TweakValue>) {
        for (label, default) in announced {
            if self.edited.contains(&label) {
                continue;
            }
            let default = self.clamp(default);
            let previous = self.values.insert(label.clone(), default);
            if previous != Some(default) {
                tracing::debug!("Tweak '{}' announced with default {}", label, default);
                self.notify(ValueEvent::Changed {
                    label,
                    value: default,
                });
            }
        }
    }

    /// Forgets which labels were edited so the next merge restores defaults.
    pub(crate) fn clear_edits(&mut self) {
        self.edited.clear();
    }

    fn clamp(&self, value: TweakValue) -> TweakValue {
        value.clamp(*self.range.start(), *self.range.end())
    }

    fn notify(&mut self, event: ValueEvent) {
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }
}
