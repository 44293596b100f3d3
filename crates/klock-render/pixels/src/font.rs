use std::path::{Path, PathBuf};

use rusttype::Font;

#[derive(thiserror::Error, Debug)]
pub enum FontError {
    #[error("error reading font file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a valid TrueType font", .path.display())]
    Invalid { path: PathBuf },
}

/// A font loaded once at startup and shared by every frame.
pub struct FontAsset {
    font: Font<'static>,
}

impl FontAsset {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FontError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let font = Font::try_from_vec(bytes).ok_or_else(|| FontError::Invalid {
            path: path.to_path_buf(),
        })?;
        log::debug!("loaded font {} ({} glyphs)", path.display(), font.glyph_count());
        Ok(Self { font })
    }

    pub fn font(&self) -> &Font<'static> {
        &self.font
    }
}

impl std::fmt::Debug for FontAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontAsset")
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}
