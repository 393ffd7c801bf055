//! Display snapshots from enumeration time.

use serde::{Deserialize, Serialize};

use sash_common::Rect;

/// Work-area geometry of one physical display. Read-only snapshot; display
/// hot-plug is not tracked, the host re-enumerates instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayDescriptor {
    pub id: String,
    pub label: String,
    pub is_primary: bool,
    pub work_area: Rect,
}

/// The set of known displays, sorted ascending by horizontal work-area
/// origin. That ordering is the sole basis for "left"/"right" semantics;
/// vertical stacking has no meaning here.
#[derive(Debug, Clone)]
pub struct DisplayMap {
    displays: Vec<DisplayDescriptor>,
    primary_id: String,
}

impl DisplayMap {
    pub fn new(mut displays: Vec<DisplayDescriptor>, primary_id: impl Into<String>) -> Self {
        displays.sort_by_key(|d| d.work_area.x);
        Self {
            displays,
            primary_id: primary_id.into(),
        }
    }

    /// Displays in left-to-right order.
    pub fn displays(&self) -> &[DisplayDescriptor] {
        &self.displays
    }

    pub fn primary_id(&self) -> &str {
        &self.primary_id
    }

    pub fn get(&self, id: &str) -> Option<&DisplayDescriptor> {
        self.displays.iter().find(|d| d.id == id)
    }

    /// The designated primary display, or the leftmost one when the
    /// primary id is not in the snapshot. `None` only for an empty map.
    pub fn primary(&self) -> Option<&DisplayDescriptor> {
        self.get(&self.primary_id).or_else(|| self.displays.first())
    }

    pub fn len(&self) -> usize {
        self.displays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.displays.is_empty()
    }
}
