use crate::foundation::core::is_known_dim;

/// Orientation class of a target frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// `width == height`.
    Square,
    /// `width > height`.
    Landscape,
    /// `width < height`.
    Portrait,
}

impl Orientation {
    /// Lowercase name as used by the authoring side.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
        }
    }
}

/// Classify a frame by its dimensions.
///
/// Returns `None` while either dimension is zero, negative or not a finite number: the
/// frame has not been measured yet.
pub fn classify_orientation(width: f64, height: f64) -> Option<Orientation> {
    if !is_known_dim(width) || !is_known_dim(height) {
        return None;
    }
    Some(if width == height {
        Orientation::Square
    } else if width > height {
        Orientation::Landscape
    } else {
        Orientation::Portrait
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/orientation.rs"]
mod tests;
