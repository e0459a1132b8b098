use serde::{Deserialize, Serialize};

/// Sizing suffix Google Books accepts for a larger cover render.
pub const LARGE_THUMBNAIL_SUFFIX: &str = "&fife=w800";

/// Placeholder shown when the catalog has no cover for a book.
pub const COVER_FALLBACK: &str = "cover-not-found.jpg";

/// A single catalog entry, enriched with precomputed emotion scores.
///
/// Rows are immutable after catalog load; `large_thumbnail` is derived once
/// at that point and is always populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    /// May encode multiple names separated by `;`.
    pub authors: String,
    pub description: String,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
    pub large_thumbnail: String,
    pub joy: f64,
    pub anger: f64,
    pub surprise: f64,
    pub fear: f64,
    pub sadness: f64,
}

impl Book {
    /// Derive the display thumbnail from the raw catalog value.
    pub fn derive_large_thumbnail(thumbnail: Option<&str>) -> String {
        match thumbnail {
            Some(url) if !url.trim().is_empty() => format!("{}{}", url, LARGE_THUMBNAIL_SUFFIX),
            _ => COVER_FALLBACK.to_string(),
        }
    }
}

/// Emotional tone a caller can rank results by.
///
/// Each recognized tone maps to exactly one emotion score on [`Book`]; the
/// ranking engine does a single stable sort on that score instead of
/// branching per tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    All,
    Happy,
    Angry,
    Surprising,
    Suspenseful,
    Sad,
}

impl Tone {
    /// All tone labels a client may request, in dropdown order.
    pub const LABELS: [&'static str; 6] =
        ["ALL", "Happy", "Surprising", "Angry", "Suspenseful", "Sad"];

    /// Parse a request value. Unrecognized tones behave as `ALL` rather than
    /// failing the request.
    pub fn parse(value: &str) -> Tone {
        match value {
            "Happy" => Tone::Happy,
            "Angry" => Tone::Angry,
            "Surprising" => Tone::Surprising,
            "Suspenseful" => Tone::Suspenseful,
            "Sad" => Tone::Sad,
            _ => Tone::All,
        }
    }

    /// The emotion score this tone ranks by, or `None` for `ALL` (no re-sort).
    pub fn emotion_score(&self, book: &Book) -> Option<f64> {
        match self {
            Tone::All => None,
            Tone::Happy => Some(book.joy),
            Tone::Angry => Some(book.anger),
            Tone::Surprising => Some(book.surprise),
            Tone::Suspenseful => Some(book.fear),
            Tone::Sad => Some(book.sadness),
        }
    }
}
