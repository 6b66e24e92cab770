use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use usvg::fontdb::{Database, Family, Query, Stretch, Style, Weight};

const SANS_FAMILIES: [&str; 5] = ["DejaVu Sans", "Liberation Sans", "Arial", "Ubuntu", "Roboto"];
const MONO_FAMILIES: [&str; 3] = ["DejaVu Sans Mono", "Liberation Mono", "Courier New"];

/// Font variant requested by a text element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FontKey {
    /// Pixel size.
    pub size: u32,
    pub bold: bool,
    pub italic: bool,
    /// Prefer a monospace face.
    pub mono: bool,
}

impl FontKey {
    pub const fn regular(size: u32) -> Self {
        Self {
            size,
            bold: false,
            italic: false,
            mono: false,
        }
    }

    pub const fn bold(size: u32) -> Self {
        Self {
            bold: true,
            ..Self::regular(size)
        }
    }

    pub const fn italic(size: u32) -> Self {
        Self {
            italic: true,
            ..Self::regular(size)
        }
    }

    pub const fn mono(size: u32) -> Self {
        Self {
            mono: true,
            ..Self::regular(size)
        }
    }
}

/// Per-pipeline font resolution cache.
///
/// The font database is loaded on first use (system fonts plus any configured font directories)
/// and shared with every SVG text layer. Resolution results, including misses, are memoized per
/// [`FontKey`].
pub struct FontCache {
    font_dirs: Vec<PathBuf>,
    db: Option<Arc<Database>>,
    resolved: HashMap<FontKey, Option<String>>,
}

impl std::fmt::Debug for FontCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontCache")
            .field("font_dirs", &self.font_dirs)
            .field("loaded_faces", &self.db.as_ref().map(|db| db.len()))
            .field("resolved", &self.resolved)
            .finish()
    }
}

impl Default for FontCache {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FontCache {
    /// Cache that loads system fonts plus every `.ttf`/`.otf`/`.ttc` in `font_dirs`.
    pub fn new(font_dirs: Vec<PathBuf>) -> Self {
        Self {
            font_dirs,
            db: None,
            resolved: HashMap::new(),
        }
    }

    /// Cache over a prepared database; nothing is loaded from the system.
    pub fn with_database(db: Database) -> Self {
        Self {
            font_dirs: Vec::new(),
            db: Some(Arc::new(db)),
            resolved: HashMap::new(),
        }
    }

    /// Shared font database, loading it on first call.
    pub fn database(&mut self) -> Arc<Database> {
        if let Some(db) = &self.db {
            return Arc::clone(db);
        }
        let db = Arc::new(build_fontdb(&self.font_dirs));
        tracing::debug!(faces = db.len(), "font database loaded");
        self.db = Some(Arc::clone(&db));
        db
    }

    /// Family name to request for `key`, or `None` if no usable face exists.
    pub fn resolve(&mut self, key: FontKey) -> Option<String> {
        if let Some(hit) = self.resolved.get(&key) {
            return hit.clone();
        }
        let db = self.database();
        let family = resolve_family(&db, key);
        if family.is_none() {
            tracing::warn!(?key, "no font face available");
        }
        self.resolved.insert(key, family.clone());
        family
    }

    /// Number of memoized keys.
    pub fn cached_keys(&self) -> usize {
        self.resolved.len()
    }

    /// SVG parsing options wired to this cache's database.
    pub fn svg_options(&mut self) -> usvg::Options<'static> {
        usvg::Options {
            fontdb: self.database(),
            font_resolver: make_svg_font_resolver(),
            ..Default::default()
        }
    }
}

fn build_fontdb(font_dirs: &[PathBuf]) -> Database {
    let mut db = Database::new();
    db.load_system_fonts();
    for dir in font_dirs {
        load_fonts_from_dir(&mut db, dir);
        load_fonts_from_dir(&mut db, &dir.join("fonts"));
    }
    db
}

fn load_fonts_from_dir(db: &mut Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(err) = db.load_font_file(&path) {
            tracing::debug!(path = %path.display(), %err, "skipping unreadable font file");
        }
    }
}

fn resolve_family(db: &Database, key: FontKey) -> Option<String> {
    let mut families = Vec::<Family<'_>>::new();
    if key.mono {
        families.push(Family::Monospace);
        families.extend(MONO_FAMILIES.iter().map(|&name| Family::Name(name)));
    }
    families.push(Family::SansSerif);
    families.extend(SANS_FAMILIES.iter().map(|&name| Family::Name(name)));

    let query = Query {
        families: &families,
        weight: if key.bold { Weight::BOLD } else { Weight::NORMAL },
        stretch: Stretch::Normal,
        style: if key.italic { Style::Italic } else { Style::Normal },
    };

    let id = db.query(&query).or_else(|| db.faces().next().map(|f| f.id))?;
    db.face(id)
        .and_then(|face| face.families.first())
        .map(|(name, _)| name.clone())
}

fn make_svg_font_resolver() -> usvg::FontResolver<'static> {
    use usvg::FontResolver;

    FontResolver {
        select_font: Box::new(|font, fontdb| {
            let mut families = Vec::<Family<'_>>::new();
            for family in font.families() {
                families.push(match family {
                    usvg::FontFamily::Serif => Family::Serif,
                    usvg::FontFamily::SansSerif => Family::SansSerif,
                    usvg::FontFamily::Cursive => Family::Cursive,
                    usvg::FontFamily::Fantasy => Family::Fantasy,
                    usvg::FontFamily::Monospace => Family::Monospace,
                    usvg::FontFamily::Named(s) => Family::Name(s),
                });
            }
            families.push(Family::SansSerif);

            let style = match font.style() {
                usvg::FontStyle::Normal => Style::Normal,
                usvg::FontStyle::Italic => Style::Italic,
                usvg::FontStyle::Oblique => Style::Oblique,
            };

            let query = Query {
                families: &families,
                weight: Weight(font.weight()),
                stretch: Stretch::Normal,
                style,
            };

            if let Some(id) = fontdb.query(&query) {
                return Some(id);
            }
            fontdb.faces().next().map(|f| f.id)
        }),
        select_fallback: FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/fonts.rs"]
mod tests;
