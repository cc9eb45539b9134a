//! Nested record blocks
//!
//! Every nested block is an explicit type with defined defaults rather than
//! a bag of maybe-present fields, so absent data is always representable
//! without runtime presence checks.

use serde::{Deserialize, Serialize};

/// Manufacturer details for a robot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Manufacturer {
    /// Company name.
    pub name: Option<String>,
    /// Country of origin.
    pub country: Option<String>,
    /// Company website URL.
    pub website: Option<String>,
}

impl Manufacturer {
    /// Create a manufacturer block with just a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Specification block, opaque to the store.
///
/// The catalog never interprets these sub-objects; they round-trip as raw
/// JSON so callers can shape physical/performance/sensor data freely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Specification {
    /// Physical characteristics (dimensions, weight, ...).
    pub physical: Option<serde_json::Value>,
    /// Performance characteristics (speed, payload, battery, ...).
    pub performance: Option<serde_json::Value>,
    /// Sensor inventory.
    pub sensors: Option<serde_json::Value>,
}

/// Where a media reference points.
///
/// A record's media block stores references, never blob payloads: either an
/// external URL or the id of a blob held by the media store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaSource {
    /// External URL.
    Url(String),
    /// Id of a blob in the media store.
    Blob(String),
}

/// A single image or video reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaRef {
    /// Where the media lives.
    pub source: MediaSource,
    /// Optional display caption.
    #[serde(default)]
    pub caption: Option<String>,
}

impl MediaRef {
    /// Reference media by external URL.
    #[must_use]
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            source: MediaSource::Url(url.into()),
            caption: None,
        }
    }

    /// Reference a blob in the media store.
    #[must_use]
    pub fn blob(id: impl Into<String>) -> Self {
        Self {
            source: MediaSource::Blob(id.into()),
            caption: None,
        }
    }

    /// Attach a caption.
    #[must_use]
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// The blob id, if this reference points into the media store.
    #[must_use]
    pub fn blob_id(&self) -> Option<&str> {
        match &self.source {
            MediaSource::Blob(id) => Some(id),
            MediaSource::Url(_) => None,
        }
    }
}

/// Media block of a record: one featured image plus ordered galleries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MediaBlock {
    /// Featured image shown in listings.
    pub featured: Option<MediaRef>,
    /// Ordered image gallery.
    pub images: Vec<MediaRef>,
    /// Ordered video list.
    pub videos: Vec<MediaRef>,
}

impl MediaBlock {
    /// Iterate over every blob id referenced by this block.
    pub fn blob_ids(&self) -> impl Iterator<Item = &str> {
        self.featured
            .iter()
            .chain(self.images.iter())
            .chain(self.videos.iter())
            .filter_map(MediaRef::blob_id)
    }
}
