//! Window capability surface and registry.

use std::collections::HashMap;

use sash_common::{Rect, SashError, WindowId};

pub type Result<T> = std::result::Result<T, SashError>;

/// The operations a window-like object exposes, declared statically.
/// Hosts implement this over their native window handle; nothing is
/// discovered by scanning a runtime object at construction time.
pub trait WindowOps: Send {
    fn show(&mut self) -> Result<()>;
    fn hide(&mut self) -> Result<()>;
    fn focus(&mut self) -> Result<()>;
    fn set_bounds(&mut self, bounds: Rect) -> Result<()>;
    fn close(&mut self) -> Result<()>;
    fn is_visible(&self) -> bool;
    fn bounds(&self) -> Rect;
}

/// Maps window ids to their capability handles. Explicitly constructed
/// and owned by the embedding application; created windows get ids from
/// an auto-incrementing counter.
#[derive(Default)]
pub struct WindowRegistry {
    windows: HashMap<WindowId, Box<dyn WindowOps>>,
    next_id: u32,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self {
            windows: HashMap::new(),
            next_id: 1,
        }
    }

    /// Register a window handle and assign it an id.
    pub fn insert(&mut self, window: Box<dyn WindowOps>) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;
        self.windows.insert(id, window);
        tracing::debug!(window = %id, "window registered");
        id
    }

    pub fn get(&self, id: WindowId) -> Option<&dyn WindowOps> {
        self.windows.get(&id).map(Box::as_ref)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Box<dyn WindowOps>> {
        self.windows.get_mut(&id)
    }

    /// Close and drop a window. Returns `false` for an unknown id.
    pub fn remove(&mut self, id: WindowId) -> bool {
        match self.windows.remove(&id) {
            Some(mut window) => {
                if let Err(e) = window.close() {
                    tracing::warn!(window = %id, error = %e, "window close failed");
                }
                true
            }
            None => false,
        }
    }

    pub fn ids(&self) -> Vec<WindowId> {
        self.windows.keys().copied().collect()
    }

    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// Close every window. Used during shutdown.
    pub fn remove_all(&mut self) {
        for id in self.ids() {
            self.remove(id);
        }
    }
}
