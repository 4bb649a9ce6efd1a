use crate::{
    foundation::core::{FrameSize, Point},
    layout::orientation::Orientation,
    scene::model::RenderableElement,
};

/// Portrait frames (and frames of unknown or landscape orientation) are scaled down by
/// this divisor on top of the base factor.
const PORTRAIT_CORRECTION: f64 = 1.5;

/// Multiplicative factor applied to authoring coordinates.
///
/// Square frames use `width_ratio * 2`. Every other case, landscape and unknown
/// orientation included, shares the portrait correction.
pub fn rescale_factor(width_ratio: f64, orientation: Option<Orientation>) -> f64 {
    let base = width_ratio * 2.0;
    match orientation {
        Some(Orientation::Square) => base,
        Some(Orientation::Portrait) | Some(Orientation::Landscape) | None => {
            base / PORTRAIT_CORRECTION
        }
    }
}

/// Map an authoring-canvas position onto the target frame.
///
/// An unmeasured frame leaves the position unchanged.
pub fn rescale_position(
    point: Point,
    frame: FrameSize,
    width_ratio: f64,
    orientation: Option<Orientation>,
) -> Point {
    if !frame.is_measured() {
        return point;
    }
    let factor = rescale_factor(width_ratio, orientation);
    Point::new(point.x * factor, point.y * factor)
}

/// Rescaler inputs for one target frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    /// Target frame dimensions.
    pub frame: FrameSize,
    /// Ratio of target width to authoring width, as supplied by the caller.
    pub width_ratio: f64,
    /// Orientation class used to pick the scale branch.
    pub orientation: Option<Orientation>,
}

impl Placement {
    /// Placement whose orientation is derived from `frame`.
    pub fn for_frame(frame: FrameSize, width_ratio: f64) -> Self {
        Self {
            frame,
            width_ratio,
            orientation: frame.orientation(),
        }
    }

    /// Rescale a single position.
    pub fn apply(&self, point: Point) -> Point {
        rescale_position(point, self.frame, self.width_ratio, self.orientation)
    }

    /// Rescale the position of every element; sizes and order are untouched.
    pub fn place(&self, elements: &[RenderableElement]) -> Vec<RenderableElement> {
        elements
            .iter()
            .map(|el| el.with_position(self.apply(el.position())))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/rescale.rs"]
mod tests;
