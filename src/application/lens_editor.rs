//! Lens editor
//!
//! Holds the lens being edited and tells registered observers about every
//! successful edit. Each edit replaces the held value with a merged copy, so a
//! calculator built from an earlier value is never affected.

use crate::domain::entities::Lens;
use crate::domain::ports::{LensEvent, LensObserver};
use crate::domain::services::{merge, LensUpdate};
use crate::error::DofResult;

pub struct LensEditor {
    lens: Lens,
    observers: Vec<Box<dyn LensObserver>>,
}

impl LensEditor {
    pub fn new(lens: Lens) -> Self {
        Self {
            lens,
            observers: Vec::new(),
        }
    }

    pub fn lens(&self) -> &Lens {
        &self.lens
    }

    pub fn into_lens(self) -> Lens {
        self.lens
    }

    pub fn subscribe(&mut self, observer: impl LensObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Merge `update` into the current lens.
    ///
    /// On error the lens is unchanged and no observer is called.
    pub fn apply(&mut self, update: &LensUpdate) -> DofResult<&Lens> {
        if update.is_empty() {
            return Ok(&self.lens);
        }
        let updated = merge(&self.lens, update)?;
        self.replace(updated);
        Ok(&self.lens)
    }

    /// Replace the current lens outright
    pub fn replace(&mut self, lens: Lens) {
        let old = std::mem::replace(&mut self.lens, lens);
        let event = LensEvent::Changed {
            old,
            new: self.lens.clone(),
        };
        for observer in &self.observers {
            observer.on_event(&event);
        }
    }
}
