//! Presentation markup loading and validation.
//!
//! A markup file is a YAML document describing the source video and the
//! ordered sections/slides anchored to frame offsets:
//!
//! ```yaml
//! title: My Awesome Presentation
//! src: video.mp4
//! sections:
//!   - label: Introduction
//!     slides:
//!       - label: Title
//!         offset: 0
//!       - offset: 100
//! settings:
//!   mute_audio: true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a markup file.
#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("Failed to read markup file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid markup: {0}")]
    Parse(String),

    #[error(
        "Slide offsets should increase: section {section}, slide {slide} has offset {offset} \
         (previous offset {previous})"
    )]
    NonIncreasingOffset {
        section: usize,
        slide: usize,
        offset: u64,
        previous: u64,
    },

    #[error("Video file not found: {path}")]
    SourceNotFound { path: PathBuf },
}

/// Per-presentation playback settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mute_audio: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { mute_audio: true }
    }
}

/// One authored slide: optional label plus the frame offset it starts at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideMarkup {
    #[serde(default)]
    pub label: Option<String>,
    pub offset: u64,
}

/// One authored section: optional label plus its slides in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionMarkup {
    #[serde(default)]
    pub label: Option<String>,
    pub slides: Vec<SlideMarkup>,
}

#[derive(Debug, Deserialize)]
struct RawMarkup {
    title: String,
    src: PathBuf,
    sections: Vec<SectionMarkup>,
    #[serde(default)]
    settings: Settings,
}

/// A validated markup document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Markup {
    /// Absolute path of the markup file itself
    pub markup_file: PathBuf,
    pub title: String,
    /// Absolute path of the video, resolved against the markup file's directory
    pub src: PathBuf,
    pub sections: Vec<SectionMarkup>,
    pub settings: Settings,
}

impl Markup {
    /// Load and validate a markup file, requiring the referenced video to exist.
    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Self, MarkupError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| MarkupError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let markup = Self::parse(&content, path)?;
        if !markup.src.is_file() {
            return Err(MarkupError::SourceNotFound {
                path: markup.src.clone(),
            });
        }

        tracing::debug!(
            markup = %markup.markup_file.display(),
            src = %markup.src.display(),
            sections = markup.sections.len(),
            "loaded markup"
        );
        Ok(markup)
    }

    /// Parse markup content as if it had been read from `markup_file`.
    ///
    /// Resolves paths and checks offsets, but does not touch the filesystem
    /// beyond resolving the current directory for relative paths.
    pub fn parse(content: &str, markup_file: &Path) -> Result<Self, MarkupError> {
        let raw: RawMarkup =
            serde_saphyr::from_str(content).map_err(|e| MarkupError::Parse(e.to_string()))?;

        let markup_file = absolute(markup_file)?;
        let base = markup_file.parent().unwrap_or_else(|| Path::new("/"));
        let src = base.join(&raw.src);

        let markup = Self {
            markup_file,
            title: raw.title,
            src,
            sections: raw.sections,
            settings: raw.settings,
        };
        markup.validate_offsets()?;
        Ok(markup)
    }

    /// Total number of slides across all sections.
    pub fn slide_count(&self) -> usize {
        self.sections.iter().map(|s| s.slides.len()).sum()
    }

    fn validate_offsets(&self) -> Result<(), MarkupError> {
        let mut previous: Option<u64> = None;

        for (section_idx, section) in self.sections.iter().enumerate() {
            for (slide_idx, slide) in section.slides.iter().enumerate() {
                if let Some(prev) = previous {
                    if slide.offset <= prev {
                        return Err(MarkupError::NonIncreasingOffset {
                            section: section_idx + 1,
                            slide: slide_idx + 1,
                            offset: slide.offset,
                            previous: prev,
                        });
                    }
                }
                previous = Some(slide.offset);
            }
        }

        Ok(())
    }
}

fn absolute(path: &Path) -> Result<PathBuf, MarkupError> {
    std::path::absolute(path).map_err(|source| MarkupError::Io {
        path: path.to_path_buf(),
        source,
    })
}
