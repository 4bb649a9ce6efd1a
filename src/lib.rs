//! poster-scene turns design-tool scene JSON into renderable poster elements.
//!
//! Templates are authored in a canvas editor that serializes its scene graph as JSON: an
//! `objects` list of text and image objects with absolute coordinates on the authoring
//! canvas. This crate converts that scene into a typed, ordered list of
//! [`RenderableElement`]s and supplies the device-side logic a renderer needs around it.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: `SceneSource -> Vec<RenderableElement>` ([`parse_scene`], [`SceneParser`])
//! 2. **Place**: rescale element positions onto the measured target frame ([`Placement`])
//! 3. **Fonts**: precompute a (family × size) font handle table ([`FontSizeTable`]) and pick
//!    the family for each text run by script ([`FontLanguage::for_text`])
//!
//! Drawing pixels, persistence and network IO belong to the caller.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Total parsing**: malformed scenes degrade to fewer elements, never to errors.
//! - **Deterministic**: parsing and placement are pure; equal input gives equal output.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod fonts;
mod foundation;
mod layout;
mod scene;
mod script;

pub use fonts::loader::{FontHandle, ParleyFontLoader, normalize_font_path};
pub use fonts::table::{
    DEFAULT_MAX_SIZE_PT, DEFAULT_MIN_SIZE_PT, FontFamilySource, FontLoader, FontSizeTable,
    FontTableCache, SizeRange,
};
pub use foundation::color::{Rgba8, parse_hex_color};
pub use foundation::core::{FrameSize, Point};
pub use foundation::error::{SceneError, SceneResult};
pub use layout::orientation::{Orientation, classify_orientation};
pub use layout::rescale::{Placement, rescale_factor, rescale_position};
pub use scene::config::{DEFAULT_LABEL_MAX_DIMENSION, LOGO_LABEL, ParseConfig, USER_IMAGE_LABEL};
pub use scene::model::{FontStyle, FontWeight, ImageElement, RenderableElement, TextElement};
pub use scene::parser::{SceneParser, SceneSource, parse_scene};
pub use script::classify::{FontLanguage, is_non_latin_script};
