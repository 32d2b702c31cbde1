use std::any::Any;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::rc::Rc;

use slotmap::SecondaryMap;

use crate::ViewId;

/// Typed name for a per-view slot.
pub struct StoreKey<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> StoreKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Side table of values attached to live views. Writes go through
/// `ViewTree`, which only accepts them for views that are still alive.
///
/// Values are handed back as the same `Rc` that was stored. A view's slots
/// go away with `evict`, which the tree calls when the view is removed; a
/// recycled slot with a newer generation never sees the old values.
#[derive(Default)]
pub struct KeyedStore {
    slots: SecondaryMap<ViewId, HashMap<&'static str, Rc<dyn Any>>>,
}

impl KeyedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<T: 'static>(&self, id: ViewId, key: &StoreKey<T>) -> Option<Rc<T>> {
        let value = self.slots.get(id)?.get(key.name)?.clone();
        match value.downcast::<T>() {
            Ok(v) => Some(v),
            Err(_) => {
                log::warn!(
                    "store: slot '{}' on {:?} holds a different type; reading as absent",
                    key.name,
                    id
                );
                None
            }
        }
    }

    /// Stores `value` under `key`, replacing what was there. `None` clears the slot.
    pub(crate) fn set<T: 'static>(
        &mut self,
        id: ViewId,
        key: &StoreKey<T>,
        value: Option<T>,
    ) {
        match value {
            Some(v) => self.set_shared(id, key, Rc::new(v)),
            None => {
                if let Some(slots) = self.slots.get_mut(id) {
                    slots.remove(key.name);
                }
            }
        }
    }

    fn set_shared<T: 'static>(&mut self, id: ViewId, key: &StoreKey<T>, value: Rc<T>) {
        match self.slots.entry(id) {
            Some(entry) => {
                entry.or_default().insert(key.name, value);
            }
            None => log::trace!("store: {:?} is stale; dropping '{}'", id, key.name),
        }
    }

    pub fn contains<T: 'static>(&self, id: ViewId, key: &StoreKey<T>) -> bool {
        self.get(id, key).is_some()
    }

    /// Drops every slot of `id`.
    pub(crate) fn evict(&mut self, id: ViewId) {
        self.slots.remove(id);
    }

    /// Number of views with at least one slot set.
    pub fn len(&self) -> usize {
        self.slots.values().filter(|s| !s.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
