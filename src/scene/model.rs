use crate::{
    foundation::color::{Rgba8, parse_hex_color},
    foundation::core::Point,
    foundation::error::SceneError,
    script::classify::FontLanguage,
};

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Font weight of a text element; also keys font families in the size table.
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Normal,
    /// Bold weight.
    Bold,
}

impl FontWeight {
    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

impl std::str::FromStr for FontWeight {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "regular" => Ok(Self::Normal),
            "bold" => Ok(Self::Bold),
            other => Err(SceneError::validation(format!(
                "unknown font weight '{other}'"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Font style of a text element.
pub enum FontStyle {
    /// Upright.
    #[default]
    Normal,
    /// Italic (oblique authoring styles map here too).
    Italic,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A text run positioned on its baseline.
pub struct TextElement {
    /// Identifier copied from the authoring object.
    pub id: String,
    /// Left edge in authoring coordinates.
    pub x: f64,
    /// Baseline: authoring `top` plus the font size.
    pub y: f64,
    /// Text content.
    pub text: String,
    /// Font size in points.
    pub font_size: f64,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Font style.
    pub font_style: FontStyle,
    /// Fill color as authored (normally a hex string).
    pub fill: String,
    /// Semantic role tag, empty when absent.
    pub label: String,
}

impl TextElement {
    /// Resolve [`TextElement::fill`] to a color, opaque black when it is not a hex color.
    pub fn fill_rgba8(&self) -> Rgba8 {
        parse_hex_color(&self.fill).unwrap_or(Rgba8::BLACK)
    }

    /// Font language matching the script of the text.
    pub fn language(&self) -> FontLanguage {
        FontLanguage::for_text(&self.text)
    }

    /// Font size rounded to the nearest whole point, for font table lookups.
    pub fn font_size_pt(&self) -> u32 {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return 0;
        }
        self.font_size.round() as u32
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A placed image with its final (scaled, possibly clamped) size.
pub struct ImageElement {
    /// Identifier copied from the authoring object.
    pub id: String,
    /// Left edge in authoring coordinates.
    pub x: f64,
    /// Top edge in authoring coordinates.
    pub y: f64,
    /// Rendered width: authored width times `scale_x`, clamped for limited labels.
    pub width: f64,
    /// Rendered height: authored height times `scale_y`, clamped for limited labels.
    pub height: f64,
    /// Image source URL or path, empty when absent.
    pub src: String,
    /// Semantic role tag, empty when absent.
    pub label: String,
    /// Authored horizontal scale.
    pub scale_x: f64,
    /// Authored vertical scale.
    pub scale_y: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
/// One drawable item of a parsed scene.
pub enum RenderableElement {
    /// Text run.
    Text(TextElement),
    /// Image.
    Image(ImageElement),
}

impl RenderableElement {
    /// Identifier copied from the authoring object.
    pub fn id(&self) -> &str {
        match self {
            Self::Text(t) => &t.id,
            Self::Image(i) => &i.id,
        }
    }

    /// Semantic role tag, empty when absent.
    pub fn label(&self) -> &str {
        match self {
            Self::Text(t) => &t.label,
            Self::Image(i) => &i.label,
        }
    }

    /// Anchor position (baseline start for text, top-left for images).
    pub fn position(&self) -> Point {
        match self {
            Self::Text(t) => Point::new(t.x, t.y),
            Self::Image(i) => Point::new(i.x, i.y),
        }
    }

    /// Copy of this element moved to `p`.
    pub fn with_position(&self, p: Point) -> Self {
        let mut out = self.clone();
        match &mut out {
            Self::Text(t) => {
                t.x = p.x;
                t.y = p.y;
            }
            Self::Image(i) => {
                i.x = p.x;
                i.y = p.y;
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
