use netflop_model::ImageSize;

pub const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// Builds CDN URLs for catalog image paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrls {
    base: String,
}

impl Default for ImageUrls {
    fn default() -> Self {
        Self::new(TMDB_IMAGE_BASE)
    }
}

impl ImageUrls {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// `{base}/{size}{path}`, or `None` when the record has no image.
    pub fn url(&self, path: Option<&str>, size: ImageSize) -> Option<String> {
        let path = path.map(str::trim).filter(|p| !p.is_empty())?;
        if path.starts_with('/') {
            Some(format!("{}/{}{}", self.base, size, path))
        } else {
            Some(format!("{}/{}/{}", self.base, size, path))
        }
    }
}
