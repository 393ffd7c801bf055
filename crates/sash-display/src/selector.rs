//! Display selection from a placement preference.

use serde::{Deserialize, Serialize};

use crate::descriptor::{DisplayDescriptor, DisplayMap};

/// A display preference as written in a placement spec: either a single
/// entry or an ordered fallback list. Entries are display ids or the
/// direction tokens `"left"` / `"right"`; the single form also accepts
/// the literal `"primary"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayTarget {
    One(String),
    Many(Vec<String>),
}

/// Resolve a preference to one concrete display.
///
/// Priority order: no preference or `"primary"` picks the designated
/// primary; a single string naming a known display id picks it; named
/// entries in a list take priority over the `"left"`/`"right"` fallback;
/// otherwise the first display in the resolved iteration direction wins
/// (`"right"` iterates in reverse horizontal order; both tokens or
/// neither defaults to `"left"`). `None` only when the map is empty.
pub fn select_display<'a>(
    preference: Option<&DisplayTarget>,
    map: &'a DisplayMap,
) -> Option<&'a DisplayDescriptor> {
    if map.is_empty() {
        return None;
    }

    let entries: &[String] = match preference {
        None => return map.primary(),
        Some(DisplayTarget::One(s)) if s == "primary" => return map.primary(),
        Some(DisplayTarget::One(s)) => {
            if let Some(display) = map.get(s) {
                return Some(display);
            }
            std::slice::from_ref(s)
        }
        Some(DisplayTarget::Many(list)) => list.as_slice(),
    };

    let wants_left = entries.iter().any(|e| e == "left");
    let wants_right = entries.iter().any(|e| e == "right");
    // Both directions, or neither, default to "left".
    let reverse = wants_right && !wants_left;

    for entry in entries {
        if entry == "left" || entry == "right" {
            continue;
        }
        if let Some(display) = map.get(entry) {
            return Some(display);
        }
    }

    tracing::debug!(?preference, reverse, "no named entry matched, using edge display");
    if reverse {
        map.displays().last()
    } else {
        map.displays().first()
    }
}
