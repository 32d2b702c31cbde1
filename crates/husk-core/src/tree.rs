use slotmap::SlotMap;

use crate::transition::{Immediate, Transition, TransitionScheduler};
use crate::{KeyedStore, StoreKey, ViewError, ViewId, ViewKind, ViewNode};

/// Owns live views, the per-view store and the transition scheduler.
///
/// Everything here runs on the UI thread. Callers serialize access to a
/// given view themselves.
pub struct ViewTree {
    nodes: SlotMap<ViewId, ViewNode>,
    store: KeyedStore,
    scheduler: Box<dyn TransitionScheduler>,
}

impl Default for ViewTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewTree {
    pub fn new() -> Self {
        Self::with_scheduler(Immediate::default())
    }

    pub fn with_scheduler(scheduler: impl TransitionScheduler + 'static) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            store: KeyedStore::new(),
            scheduler: Box::new(scheduler),
        }
    }

    pub fn insert(&mut self, kind: ViewKind) -> ViewId {
        self.nodes.insert_with_key(|id| ViewNode::new(id, kind))
    }

    pub fn insert_child(&mut self, parent: ViewId, kind: ViewKind) -> Result<ViewId, ViewError> {
        if !self.nodes.contains_key(parent) {
            return Err(ViewError::Stale(parent));
        }
        let id = self.insert(kind);
        if let Some(child) = self.nodes.get_mut(id) {
            child.parent = Some(parent);
        }
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(id);
        }
        Ok(id)
    }

    /// Removes `id` and its whole subtree, dropping their stored snapshots.
    /// Returns `false` if `id` was already gone.
    pub fn remove(&mut self, id: ViewId) -> bool {
        let Some(node) = self.nodes.get(id) else {
            return false;
        };
        if let Some(parent) = node.parent
            && let Some(p) = self.nodes.get_mut(parent)
        {
            p.children.retain(|c| *c != id);
        }

        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.remove(next) {
                stack.extend(node.children.iter().copied());
                self.store.evict(next);
                log::trace!("tree: removed {:?}", next);
            }
        }
        true
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get(&self, id: ViewId) -> Option<&ViewNode> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut ViewNode> {
        self.nodes.get_mut(id)
    }

    pub fn try_get(&self, id: ViewId) -> Result<&ViewNode, ViewError> {
        self.nodes.get(id).ok_or(ViewError::Stale(id))
    }

    pub fn try_get_mut(&mut self, id: ViewId) -> Result<&mut ViewNode, ViewError> {
        self.nodes.get_mut(id).ok_or(ViewError::Stale(id))
    }

    pub fn children(&self, id: ViewId) -> &[ViewId] {
        self.nodes.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ViewNode> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn store(&self) -> &KeyedStore {
        &self.store
    }

    /// Writes a per-view slot; `None` clears it. Only live views accept
    /// writes, so nothing stored outlives its view.
    pub fn set_slot<T: 'static>(
        &mut self,
        id: ViewId,
        key: &StoreKey<T>,
        value: Option<T>,
    ) -> Result<(), ViewError> {
        if !self.nodes.contains_key(id) {
            return Err(ViewError::Stale(id));
        }
        self.store.set(id, key, value);
        Ok(())
    }

    pub(crate) fn view_and_store_mut(
        &mut self,
        id: ViewId,
    ) -> Option<(&ViewNode, &mut KeyedStore)> {
        let view = self.nodes.get(id)?;
        Some((view, &mut self.store))
    }

    pub(crate) fn schedule(&mut self, transition: Transition) {
        self.scheduler.submit(transition);
    }

    pub fn pending_transitions(&self) -> usize {
        self.scheduler.pending()
    }

    /// Applies transitions the scheduler reports as due. Returns how many
    /// reached a live view.
    pub fn pump_transitions(&mut self) -> usize {
        let due = self.scheduler.take_due(crate::animation::now());
        self.apply_all(due)
    }

    /// Applies every queued transition regardless of timing.
    pub fn flush_transitions(&mut self) -> usize {
        let all = self.scheduler.take_all();
        self.apply_all(all)
    }

    fn apply_all(&mut self, transitions: Vec<Transition>) -> usize {
        let mut applied = 0;
        for t in transitions {
            match self.nodes.get_mut(t.target) {
                Some(view) => {
                    t.apply(view);
                    applied += 1;
                }
                None => log::trace!(
                    "transition: {:?} target {:?} is gone; skipping",
                    t.layer,
                    t.target
                ),
            }
        }
        applied
    }

    /// Advances running cross-dissolves. Returns `true` while any is still running.
    pub fn tick_animations(&mut self) -> bool {
        let mut running = false;
        for view in self.nodes.values_mut() {
            running |= view.tick_dissolve();
        }
        running
    }
}
