//! Precomputed (family × size) font handle table.
//!
//! The renderer draws text at whole point sizes in a fixed range. Loading a handle per
//! size once, up front, turns every draw-time font request into an array lookup.

use std::{collections::HashMap, sync::Arc};

use crate::{
    foundation::error::{SceneError, SceneResult},
    scene::model::{FontWeight, TextElement},
    script::classify::FontLanguage,
};

/// Smallest size in the default table.
pub const DEFAULT_MIN_SIZE_PT: u32 = 8;
/// Largest size in the default table.
pub const DEFAULT_MAX_SIZE_PT: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "SizeRangeDef")]
/// Inclusive range of whole point sizes.
pub struct SizeRange {
    min: u32,
    max: u32,
}

#[derive(serde::Deserialize)]
struct SizeRangeDef {
    min: u32,
    max: u32,
}

impl TryFrom<SizeRangeDef> for SizeRange {
    type Error = SceneError;

    fn try_from(def: SizeRangeDef) -> Result<Self, Self::Error> {
        Self::new(def.min, def.max)
    }
}

impl Default for SizeRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SIZE_PT,
            max: DEFAULT_MAX_SIZE_PT,
        }
    }
}

impl SizeRange {
    /// Build `min..=max`; sizes start at 1pt.
    pub fn new(min: u32, max: u32) -> SceneResult<Self> {
        if min == 0 {
            return Err(SceneError::validation("font size range must start at >= 1"));
        }
        if min > max {
            return Err(SceneError::validation("font size range min must be <= max"));
        }
        Ok(Self { min, max })
    }

    /// Smallest size.
    pub fn min(self) -> u32 {
        self.min
    }

    /// Largest size.
    pub fn max(self) -> u32 {
        self.max
    }

    /// Number of sizes in the range.
    pub fn len(self) -> usize {
        (self.max - self.min) as usize + 1
    }

    /// Always false: a range holds at least one size.
    pub fn is_empty(self) -> bool {
        false
    }

    /// True when `size_pt` lies in the range.
    pub fn contains(self, size_pt: u32) -> bool {
        self.min <= size_pt && size_pt <= self.max
    }

    /// Table index of `size_pt`.
    pub fn index_of(self, size_pt: u32) -> Option<usize> {
        self.contains(size_pt)
            .then(|| (size_pt - self.min) as usize)
    }

    /// Sizes in ascending order.
    pub fn sizes(self) -> impl Iterator<Item = u32> {
        self.min..=self.max
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// One font family the renderer needs, and where its asset lives.
pub struct FontFamilySource {
    /// Script/locale the family serves.
    pub language: FontLanguage,
    /// Weight of the family.
    pub weight: FontWeight,
    /// Loader-specific source, e.g. a font file path.
    pub source: String,
}

impl std::str::FromStr for FontFamilySource {
    type Err = SceneError;

    /// Parse `<language>:<weight>:<source>`, e.g. `hindi:bold:fonts/Mukta-Bold.ttf`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let (Some(language), Some(weight), Some(source)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(SceneError::validation(format!(
                "font family '{s}' must look like <language>:<weight>:<source>"
            )));
        };
        if source.trim().is_empty() {
            return Err(SceneError::validation(format!(
                "font family '{s}' has an empty source"
            )));
        }
        Ok(Self {
            language: language.parse()?,
            weight: weight.parse()?,
            source: source.trim().to_string(),
        })
    }
}

/// Acquires one font handle per (family, size).
pub trait FontLoader {
    /// Handle type stored in the table.
    type Handle: Clone;

    /// Load `family` at `size_pt`.
    fn load(&mut self, family: &FontFamilySource, size_pt: u32) -> SceneResult<Self::Handle>;
}

#[derive(Clone, Debug)]
/// Dense table of font handles: one row per family, one column per size.
///
/// Entry `i` of a row holds the handle for `range.min() + i`, or `None` when loading
/// that (family, size) pair failed.
pub struct FontSizeTable<H> {
    range: SizeRange,
    families: Vec<FontFamilySource>,
    rows: Vec<Vec<Option<H>>>,
}

impl<H: Clone> FontSizeTable<H> {
    /// Load every (family, size) pair through `loader`.
    ///
    /// Individual failures are logged and leave a hole; they never abort the build.
    #[tracing::instrument(skip(families, loader), fields(families = families.len()))]
    pub fn build<L>(families: Vec<FontFamilySource>, range: SizeRange, loader: &mut L) -> Self
    where
        L: FontLoader<Handle = H>,
    {
        let rows: Vec<Vec<Option<H>>> = families
            .iter()
            .map(|family| {
                range
                    .sizes()
                    .map(|size_pt| match loader.load(family, size_pt) {
                        Ok(handle) => Some(handle),
                        Err(err) => {
                            tracing::warn!(
                                language = family.language.as_str(),
                                weight = family.weight.as_str(),
                                source = %family.source,
                                size_pt,
                                error = %err,
                                "font load failed; leaving table entry empty"
                            );
                            None
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            range,
            families,
            rows,
        }
    }

    /// Size range covered by every row.
    pub fn range(&self) -> SizeRange {
        self.range
    }

    /// Families in row order.
    pub fn families(&self) -> &[FontFamilySource] {
        &self.families
    }

    /// Entries of row `family_index`, ordered by size.
    pub fn row(&self, family_index: usize) -> Option<&[Option<H>]> {
        self.rows.get(family_index).map(Vec::as_slice)
    }

    /// Handle for (`family_index`, `size_pt`).
    pub fn get(&self, family_index: usize, size_pt: u32) -> Option<&H> {
        let col = self.range.index_of(size_pt)?;
        self.rows.get(family_index)?.get(col)?.as_ref()
    }

    /// Handle of the first family declared for (`language`, `weight`) at `size_pt`.
    pub fn lookup(&self, language: FontLanguage, weight: FontWeight, size_pt: u32) -> Option<&H> {
        let row = self
            .families
            .iter()
            .position(|f| f.language == language && f.weight == weight)?;
        self.get(row, size_pt)
    }

    /// Handle for drawing `text`: language from its script, weight and rounded size.
    pub fn for_text(&self, text: &TextElement) -> Option<&H> {
        self.lookup(text.language(), text.font_weight, text.font_size_pt())
    }

    /// (family index, size) pairs whose load failed.
    pub fn failed_entries(&self) -> Vec<(usize, u32)> {
        let mut out = Vec::new();
        for (row_idx, row) in self.rows.iter().enumerate() {
            for (size_pt, entry) in self.range.sizes().zip(row) {
                if entry.is_none() {
                    out.push((row_idx, size_pt));
                }
            }
        }
        out
    }
}

/// Built tables keyed by the families and size range they were built from.
///
/// Owned by whoever owns the loading session; tables are shared read-only.
pub struct FontTableCache<H> {
    tables: HashMap<(Vec<FontFamilySource>, SizeRange), Arc<FontSizeTable<H>>>,
}

impl<H> Default for FontTableCache<H> {
    fn default() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }
}

impl<H: Clone> FontTableCache<H> {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the table for (`families`, `range`), building it on first request.
    pub fn get_or_build<L>(
        &mut self,
        families: &[FontFamilySource],
        range: SizeRange,
        loader: &mut L,
    ) -> Arc<FontSizeTable<H>>
    where
        L: FontLoader<Handle = H>,
    {
        let key = (families.to_vec(), range);
        if let Some(table) = self.tables.get(&key) {
            return Arc::clone(table);
        }
        let table = Arc::new(FontSizeTable::build(families.to_vec(), range, loader));
        self.tables.insert(key, Arc::clone(&table));
        table
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// True when nothing has been built yet.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Drop every cached table.
    pub fn clear(&mut self) {
        self.tables.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/table.rs"]
mod tests;
