//! Symbolic/percentage placement specs resolved to pixel rectangles.

use serde::{Deserialize, Serialize};

use sash_common::{GeometryError, Rect};

use crate::descriptor::DisplayDescriptor;

/// One axis value of a placement spec, as the caller wrote it: a pixel
/// count, or a string holding a percentage (`"50%"`), an integer, or one
/// of the position literals `center` / `min` / `max`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Px(i32),
    Text(String),
}

impl SpecValue {
    pub fn px(value: i32) -> Self {
        SpecValue::Px(value)
    }

    pub fn text(value: impl Into<String>) -> Self {
        SpecValue::Text(value.into())
    }

    /// Resolve as a size against a display dimension. The position
    /// literals have no meaningful sizing semantics and are rejected.
    fn as_size(&self, dimension: i32, axis: &str) -> Result<i32, GeometryError> {
        match self {
            SpecValue::Px(n) => Ok(*n),
            SpecValue::Text(t) => match t.as_str() {
                "center" | "min" | "max" => Err(GeometryError::InvalidSpec(format!(
                    "{axis} cannot be '{t}'"
                ))),
                _ => scale_or_parse(t, dimension, axis),
            },
        }
    }

    /// Resolve as a position against the travel range left over once the
    /// size on this axis is known.
    fn as_position(&self, travel: i32, axis: &str) -> Result<i32, GeometryError> {
        match self {
            SpecValue::Px(n) => Ok(*n),
            SpecValue::Text(t) => match t.as_str() {
                "center" => Ok(travel / 2),
                "min" => Ok(0),
                "max" => Ok(travel),
                _ => scale_or_parse(t, travel, axis),
            },
        }
    }
}

/// A percentage string scales the range; an integer string passes through.
/// Anything else is a spec bug and surfaces immediately.
fn scale_or_parse(text: &str, range: i32, axis: &str) -> Result<i32, GeometryError> {
    if let Some(number) = text.strip_suffix('%') {
        let percent: f64 = number.parse().map_err(|_| {
            GeometryError::InvalidSpec(format!("{axis}: malformed percentage '{text}'"))
        })?;
        return Ok((range as f64 * percent / 100.0) as i32);
    }
    text.parse().map_err(|_| {
        GeometryError::InvalidSpec(format!("{axis}: unrecognized value '{text}'"))
    })
}

/// Desired window geometry before resolution. Defaults fill the display
/// from its top-left corner with no padding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementSpec {
    pub width: SpecValue,
    pub height: SpecValue,
    pub x: SpecValue,
    pub y: SpecValue,
    pub padding: u32,
}

impl Default for PlacementSpec {
    fn default() -> Self {
        Self {
            width: SpecValue::text("100%"),
            height: SpecValue::text("100%"),
            x: SpecValue::text("min"),
            y: SpecValue::text("min"),
            padding: 0,
        }
    }
}

/// Resolve a placement spec on one display.
///
/// Sizes resolve first, each independently against the display dimension.
/// Positions resolve next against the remaining travel range, then shift
/// into the display's absolute coordinate space. Finally each axis is
/// clamped so the rectangle never violates the padding margin, shrinking
/// the size and pinning the position to the padding edge when the
/// requested size was too large to honor both. Outputs truncate to whole
/// pixels.
pub fn resolve_geometry(
    spec: &PlacementSpec,
    display: &DisplayDescriptor,
) -> Result<Rect, GeometryError> {
    let area = display.work_area;

    let mut width = spec.width.as_size(area.width, "width")?;
    let mut height = spec.height.as_size(area.height, "height")?;

    let mut x = area.x + spec.x.as_position(area.width - width, "x")?;
    let mut y = area.y + spec.y.as_position(area.height - height, "y")?;

    let padding = spec.padding as i32;
    let max_width = area.width - 2 * padding;
    if width > max_width {
        width = max_width;
        x = area.x + padding;
    }
    let max_height = area.height - 2 * padding;
    if height > max_height {
        height = max_height;
        y = area.y + padding;
    }

    Ok(Rect::new(x, y, width, height))
}
