use std::fmt::{self, Display, Formatter};

/// Width buckets served by the catalog's image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImageSize {
    W185,
    W300,
    W342,
    W500,
    W780,
    W1280,
    Original,
}

impl ImageSize {
    /// Poster size used by cards.
    pub const fn poster() -> Self {
        Self::W342
    }

    /// Backdrop size used by hero banners.
    pub const fn backdrop() -> Self {
        Self::W1280
    }

    /// Cast photo size.
    pub const fn profile() -> Self {
        Self::W185
    }

    /// Episode still size.
    pub const fn still() -> Self {
        Self::W300
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ImageSize::W185 => "w185",
            ImageSize::W300 => "w300",
            ImageSize::W342 => "w342",
            ImageSize::W500 => "w500",
            ImageSize::W780 => "w780",
            ImageSize::W1280 => "w1280",
            ImageSize::Original => "original",
        }
    }
}

impl Display for ImageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
