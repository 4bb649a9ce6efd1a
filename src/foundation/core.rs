pub use kurbo::Point;

use crate::layout::orientation::{Orientation, classify_orientation};

/// Pixel dimensions of the target canvas, as reported by the frame provider.
///
/// Before layout has run the provider reports zeros; such a frame is "not measured".
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameSize {
    /// Frame width in pixels.
    #[serde(default)]
    pub width: f64,
    /// Frame height in pixels.
    #[serde(default)]
    pub height: f64,
}

impl FrameSize {
    /// Build a frame size from raw dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are finite and strictly positive.
    pub fn is_measured(self) -> bool {
        is_known_dim(self.width) && is_known_dim(self.height)
    }

    /// Orientation class of this frame, `None` until the frame is measured.
    pub fn orientation(self) -> Option<Orientation> {
        classify_orientation(self.width, self.height)
    }
}

pub(crate) fn is_known_dim(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
