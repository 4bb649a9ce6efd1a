//! Serde model of the design tool's serialized objects.
//!
//! Only the fields the renderer needs are declared; everything else the editor writes is
//! ignored. Optional fields treat `null` the same as absent.

use serde::{Deserialize, Deserializer};

use crate::scene::{
    config::ParseConfig,
    model::{FontStyle, FontWeight, ImageElement, RenderableElement, TextElement},
};

/// Discriminator of editable text objects.
pub(crate) const TEXT_TYPE: &str = "IText";
/// Discriminator of image objects.
pub(crate) const IMAGE_TYPE: &str = "Image";

/// Minimum numeric weight rendered as bold.
const BOLD_WEIGHT_THRESHOLD: f64 = 600.0;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub(crate) enum AuthoringObject {
    #[serde(rename = "IText")]
    Text(AuthoringText),
    #[serde(rename = "Image")]
    Image(AuthoringImage),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthoringText {
    pub(crate) id: ObjectId,
    pub(crate) left: f64,
    pub(crate) top: f64,
    pub(crate) font_size: Option<f64>,
    pub(crate) text: Option<String>,
    pub(crate) font_weight: Option<WeightDef>,
    pub(crate) font_style: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub(crate) fill: Option<String>,
    pub(crate) label: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthoringImage {
    pub(crate) id: ObjectId,
    pub(crate) left: f64,
    pub(crate) top: f64,
    pub(crate) src: Option<String>,
    pub(crate) width: Option<f64>,
    pub(crate) height: Option<f64>,
    pub(crate) scale_x: Option<f64>,
    pub(crate) scale_y: Option<f64>,
    pub(crate) label: Option<String>,
}

/// Object identifier; the editor writes strings, older templates numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ObjectId(pub(crate) String);

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Str(String),
            Num(serde_json::Number),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Str(s) => Ok(Self(s)),
            Repr::Num(n) => Ok(Self(n.to_string())),
        }
    }
}

/// `fontWeight` as written by the editor: a keyword or a CSS numeric weight.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum WeightDef {
    Num(f64),
    Name(String),
}

impl WeightDef {
    fn resolve(&self) -> FontWeight {
        match self {
            Self::Num(w) if *w >= BOLD_WEIGHT_THRESHOLD => FontWeight::Bold,
            Self::Num(_) => FontWeight::Normal,
            Self::Name(name) => match name.trim().to_ascii_lowercase().as_str() {
                "bold" | "bolder" => FontWeight::Bold,
                other => match other.parse::<f64>() {
                    Ok(w) if w >= BOLD_WEIGHT_THRESHOLD => FontWeight::Bold,
                    _ => FontWeight::Normal,
                },
            },
        }
    }
}

fn resolve_style(style: Option<&str>) -> FontStyle {
    match style.map(|s| s.trim().to_ascii_lowercase()) {
        Some(s) if s == "italic" || s == "oblique" => FontStyle::Italic,
        _ => FontStyle::Normal,
    }
}

/// Gradient and pattern fills are objects; those fall back to the default fill.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match v {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}

impl AuthoringObject {
    pub(crate) fn into_element(self, cfg: &ParseConfig) -> RenderableElement {
        match self {
            Self::Text(t) => RenderableElement::Text(t.into_element(cfg)),
            Self::Image(i) => RenderableElement::Image(i.into_element(cfg)),
        }
    }
}

impl AuthoringText {
    fn into_element(self, cfg: &ParseConfig) -> TextElement {
        let font_size = self.font_size.unwrap_or(cfg.default_font_size);
        TextElement {
            id: self.id.0,
            x: self.left,
            y: self.top + font_size,
            text: self.text.unwrap_or_default(),
            font_size,
            font_weight: self
                .font_weight
                .as_ref()
                .map(WeightDef::resolve)
                .unwrap_or_default(),
            font_style: resolve_style(self.font_style.as_deref()),
            fill: self.fill.unwrap_or_else(|| cfg.default_fill.clone()),
            label: self.label.unwrap_or_default(),
        }
    }
}

impl AuthoringImage {
    fn into_element(self, cfg: &ParseConfig) -> ImageElement {
        let label = self.label.unwrap_or_default();
        let scale_x = self.scale_x.unwrap_or(1.0);
        let scale_y = self.scale_y.unwrap_or(1.0);
        let mut width = self.width.unwrap_or(cfg.default_image_width) * scale_x;
        let mut height = self.height.unwrap_or(cfg.default_image_height) * scale_y;
        if let Some(max) = cfg.max_dimension_for(&label) {
            width = width.min(max);
            height = height.min(max);
        }

        ImageElement {
            id: self.id.0,
            x: self.left,
            y: self.top,
            width,
            height,
            src: self.src.unwrap_or_default(),
            label,
            scale_x,
            scale_y,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/authoring.rs"]
mod tests;
