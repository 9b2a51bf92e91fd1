//! Content entity types
//!
//! Every record is immutable after load. Cross references (`raag_id`,
//! `shabad_id`, `section_id`) are plain strings and are not validated; a
//! dangling reference simply resolves to nothing.
//!
//! All types serialize with camelCase field names, which is the shape the
//! browser client consumes.

use serde::{Deserialize, Serialize};

/// One entry on the biography timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    /// Year or year range, e.g. "1665-1675"
    pub year: String,
    pub label: String,
    /// Id of the [`BiographySection`] this event scrolls to
    pub section_id: String,
}

/// Long-form biography text block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiographySection {
    pub id: String,
    pub heading: String,
    pub content: String,
}

/// Raag metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaagInfo {
    pub id: String,
    pub name: String,
    /// Traditional time of day for singing
    pub time: String,
    pub mood: String,
    pub significance: String,
    /// Number of shabads in this raag across the complete baani
    pub shabad_count: u32,
}

/// Raag details carried inline by a [`Shabad`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShabadRaag {
    pub name: String,
    pub time: String,
    pub mood: String,
    pub significance: String,
}

/// Devotional hymn with meaning and commentary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shabad {
    pub id: String,
    pub title: String,
    pub raag_id: String,
    /// Hymn text in Gurmukhi script
    pub gurmukhi: String,
    pub meaning: String,
    /// Commentary (teeka)
    pub teeka: String,
    pub raag: ShabadRaag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    pub page_number: u32,
}

/// Kirtan recording metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioTrack {
    pub id: String,
    pub title: String,
    pub raag_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shabad_id: Option<String>,
    pub performer: String,
    /// Display duration, "mm:ss"
    pub duration: String,
    pub audio_url: String,
    pub description: String,
}

/// Downloadable PDF attached to a gurdwara
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfAsset {
    pub label: String,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GurdwaraLocation {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_embed_url: Option<String>,
}

/// Historical gurdwara record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gurdwara {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub brief_history: String,
    pub full_history: String,
    pub location: GurdwaraLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_assets: Option<Vec<PdfAsset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_date: Option<String>,
    /// Explicit order as written in the content file, or the unordered sentinel
    pub chronological_order: serde_json::Number,
}

/// Downloadable resource, grouped by `category` on the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub pdf_url: String,
    pub category: String,
}

/// Scanned page of the printed baani
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaaniPage {
    pub id: String,
    pub page_number: i64,
    pub image_url: String,
    pub title: String,
}

/// Single hymn within a [`BaaniRaag`] grouping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaaniShabad {
    pub id: String,
    pub text: String,
    pub order: u32,
}

/// Text-based baani grouped by raag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaaniRaag {
    pub id: String,
    pub name: String,
    pub title: String,
    pub order: u32,
    pub shabads: Vec<BaaniShabad>,
}
