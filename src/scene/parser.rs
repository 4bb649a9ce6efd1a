use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    foundation::error::SceneError,
    scene::{
        authoring::{AuthoringObject, IMAGE_TYPE, TEXT_TYPE},
        config::ParseConfig,
        model::RenderableElement,
    },
};

/// Field of the scene root holding the object list.
const OBJECTS_FIELD: &str = "objects";

#[derive(Clone, Debug, PartialEq)]
/// A serialized authoring scene, either still encoded or already decoded.
pub enum SceneSource {
    /// JSON-encoded scene document.
    Text(String),
    /// Decoded scene root object.
    Object(Map<String, Value>),
}

impl From<&str> for SceneSource {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for SceneSource {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Map<String, Value>> for SceneSource {
    fn from(m: Map<String, Value>) -> Self {
        Self::Object(m)
    }
}

impl TryFrom<Value> for SceneSource {
    type Error = SceneError;

    /// Accepts a JSON object or a JSON string holding the encoded scene. Any other value
    /// means the caller handed over something that is not a scene at all.
    fn try_from(v: Value) -> Result<Self, Self::Error> {
        match v {
            Value::Object(m) => Ok(Self::Object(m)),
            Value::String(s) => Ok(Self::Text(s)),
            other => Err(SceneError::validation(format!(
                "scene source must be a JSON object or string, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Converts authoring scenes into renderable elements.
///
/// Parsing is total: undecodable scenes yield an empty list, and objects of unknown type
/// or with malformed fields are dropped. Output order follows the authoring object order.
#[derive(Clone, Debug, Default)]
pub struct SceneParser {
    config: ParseConfig,
}

impl SceneParser {
    /// Parser applying `config`.
    pub fn new(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Parse `source` into renderable elements.
    pub fn parse(&self, source: &SceneSource) -> Vec<RenderableElement> {
        match source {
            SceneSource::Object(root) => self.parse_root(root),
            SceneSource::Text(s) => match serde_json::from_str::<Value>(s) {
                Ok(Value::Object(root)) => self.parse_root(&root),
                Ok(other) => {
                    tracing::warn!(
                        kind = json_kind(&other),
                        "scene JSON root is not an object; treating scene as empty"
                    );
                    Vec::new()
                }
                Err(err) => {
                    tracing::warn!(error = %err, "failed to decode scene JSON; treating scene as empty");
                    Vec::new()
                }
            },
        }
    }

    fn parse_root(&self, root: &Map<String, Value>) -> Vec<RenderableElement> {
        let objects = match root.get(OBJECTS_FIELD) {
            Some(Value::Array(objects)) => objects,
            Some(other) => {
                tracing::warn!(
                    kind = json_kind(other),
                    "scene '{OBJECTS_FIELD}' is not an array; treating scene as empty"
                );
                return Vec::new();
            }
            None => {
                tracing::debug!("scene has no '{OBJECTS_FIELD}' list");
                return Vec::new();
            }
        };

        objects
            .iter()
            .enumerate()
            .filter_map(|(index, obj)| self.parse_object(index, obj))
            .collect()
    }

    fn parse_object(&self, index: usize, obj: &Value) -> Option<RenderableElement> {
        let kind = obj.get("type").and_then(Value::as_str);
        if !matches!(kind, Some(TEXT_TYPE) | Some(IMAGE_TYPE)) {
            tracing::trace!(index, kind, "skipping unsupported scene object");
            return None;
        }

        match AuthoringObject::deserialize(obj) {
            Ok(parsed) => Some(parsed.into_element(&self.config)),
            Err(err) => {
                tracing::debug!(index, kind, error = %err, "dropping malformed scene object");
                None
            }
        }
    }
}

/// Parse `source` with the default [`ParseConfig`].
pub fn parse_scene(source: impl Into<SceneSource>) -> Vec<RenderableElement> {
    SceneParser::default().parse(&source.into())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/parser.rs"]
mod tests;
