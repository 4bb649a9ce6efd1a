use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;

use crate::{
    fonts::table::{FontFamilySource, FontLoader},
    foundation::error::{SceneError, SceneResult},
};

#[derive(Clone)]
/// A font family resolved at one point size.
pub struct FontHandle {
    /// Family name reported by the font data.
    pub family_name: String,
    /// Point size this handle was requested at.
    pub size_pt: u32,
    /// Raw font file bytes, shared by every size of the family.
    pub font_bytes: Arc<Vec<u8>>,
}

impl std::fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontHandle")
            .field("family_name", &self.family_name)
            .field("size_pt", &self.size_pt)
            .field("font_bytes_len", &self.font_bytes.len())
            .finish()
    }
}

struct RegisteredFamily {
    family_name: String,
    font_bytes: Arc<Vec<u8>>,
}

/// [`FontLoader`] reading font files below a root directory and registering them with
/// Parley.
///
/// Each family file is read and registered once; every size then shares its bytes. A
/// family that fails to load keeps failing for every size without touching the disk again.
pub struct ParleyFontLoader {
    root: PathBuf,
    font_ctx: parley::FontContext,
    families: HashMap<String, Result<RegisteredFamily, String>>,
}

impl ParleyFontLoader {
    /// Loader resolving family sources relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            font_ctx: parley::FontContext::default(),
            families: HashMap::new(),
        }
    }

    /// Root directory used when resolving family sources.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Font context holding every registered family, for building text layouts.
    pub fn font_context_mut(&mut self) -> &mut parley::FontContext {
        &mut self.font_ctx
    }

    fn register(&mut self, norm_path: &str) -> SceneResult<RegisteredFamily> {
        let path = self.root.join(Path::new(norm_path));
        let bytes = std::fs::read(&path)
            .with_context(|| format!("read font bytes from '{}'", path.display()))?;

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            SceneError::font(format!("no font families registered from '{norm_path}'"))
        })?;
        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| SceneError::font("registered font family has no name"))?
            .to_string();

        Ok(RegisteredFamily {
            family_name,
            font_bytes: Arc::new(bytes),
        })
    }
}

impl FontLoader for ParleyFontLoader {
    type Handle = FontHandle;

    fn load(&mut self, family: &FontFamilySource, size_pt: u32) -> SceneResult<FontHandle> {
        let norm_path = normalize_font_path(&family.source)?;
        if !self.families.contains_key(&norm_path) {
            let registered = self.register(&norm_path).map_err(|e| format!("{e:#}"));
            self.families.insert(norm_path.clone(), registered);
        }

        match self.families.get(&norm_path) {
            Some(Ok(reg)) => Ok(FontHandle {
                family_name: reg.family_name.clone(),
                size_pt,
                font_bytes: Arc::clone(&reg.font_bytes),
            }),
            Some(Err(msg)) => Err(SceneError::font(msg.clone())),
            None => Err(SceneError::font(format!(
                "font family '{norm_path}' was not registered"
            ))),
        }
    }
}

/// Font file extensions the loader accepts.
const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc"];

/// Turn a family source into a root-relative font file path.
///
/// Separators become `/` and `.` segments disappear. Absolute paths, drive prefixes
/// (`C:`), parent traversals and files without a font extension are rejected.
pub fn normalize_font_path(source: &str) -> SceneResult<String> {
    let source = source.trim();
    let unified = source.replace('\\', "/");
    if unified.starts_with('/') {
        return Err(SceneError::validation(format!(
            "font source '{source}' must be relative to the font root"
        )));
    }

    let segments = unified
        .split('/')
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .map(|seg| {
            if seg == ".." {
                Err(SceneError::validation(format!(
                    "font source '{source}' must not leave the font root"
                )))
            } else if seg.contains(':') {
                Err(SceneError::validation(format!(
                    "font source '{source}' must not carry a drive or scheme prefix"
                )))
            } else {
                Ok(seg)
            }
        })
        .collect::<SceneResult<Vec<&str>>>()?;

    let Some(file_name) = segments.last() else {
        return Err(SceneError::validation("font source must name a font file"));
    };
    let has_font_ext = file_name
        .rsplit_once('.')
        .is_some_and(|(_, ext)| FONT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
    if !has_font_ext {
        return Err(SceneError::validation(format!(
            "font source '{source}' must be a .ttf, .otf or .ttc file"
        )));
    }

    Ok(segments.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/loader.rs"]
mod tests;
