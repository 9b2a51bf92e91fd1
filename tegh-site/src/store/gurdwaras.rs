//! Gurdwara records
//!
//! `gurdwara-data.json` holds raw records (name plus long-form content).
//! At load each record is enriched with a brief history, a location taken
//! from the name, an image and any PDF assets from the lookup tables in
//! `data/gurdwara-assets.json`, then the list is sorted chronologically.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Number;
use tegh_common::models::{Gurdwara, GurdwaraLocation, PdfAsset};
use tegh_common::Result;
use tracing::{error, info};

use super::seed;

const ASSETS_JSON: &str = include_str!("../../data/gurdwara-assets.json");

/// Order given to records without an explicit chronological order
pub const UNORDERED_SENTINEL: u32 = 999;

/// Maximum length, in characters, of the brief history
pub const BRIEF_HISTORY_CHARS: usize = 200;

/// Record as produced by the extraction step
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGurdwara {
    pub id: String,
    pub name: String,
    pub content: String,
    #[serde(default)]
    pub pdf_file_name: Option<String>,
    /// Any JSON number; fractional and negative orders are kept as written
    #[serde(default)]
    pub chronological_order: Option<Number>,
    #[serde(default)]
    pub visit_date: Option<String>,
}

/// Manually maintained id → image / PDF lookup tables
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GurdwaraAssets {
    /// Image used when a gurdwara has no entry in `images`
    pub default_image: String,
    /// Label shown for every PDF asset
    pub pdf_label: String,
    #[serde(default)]
    pub images: HashMap<String, String>,
    #[serde(default)]
    pub pdfs: HashMap<String, Vec<String>>,
}

impl GurdwaraAssets {
    pub fn embedded() -> Result<Self> {
        seed::parse("gurdwara-assets.json", ASSETS_JSON)
    }

    fn image_for(&self, id: &str) -> String {
        self.images
            .get(id)
            .cloned()
            .unwrap_or_else(|| self.default_image.clone())
    }

    fn pdfs_for(&self, id: &str) -> Option<Vec<PdfAsset>> {
        let files = self.pdfs.get(id).filter(|files| !files.is_empty())?;
        Some(
            files
                .iter()
                .map(|file_name| PdfAsset {
                    label: self.pdf_label.clone(),
                    file_name: file_name.clone(),
                })
                .collect(),
        )
    }
}

/// Load, enrich and sort gurdwara records
///
/// Any failure is logged and yields an empty list so the site still starts.
pub fn load_gurdwaras(path: &Path, assets: &GurdwaraAssets) -> Vec<Gurdwara> {
    match read_raw(path) {
        Ok(raw) => {
            let mut gurdwaras: Vec<Gurdwara> = raw.iter().map(|r| enrich(r, assets)).collect();
            sort_chronologically(&mut gurdwaras);
            info!("Loaded {} gurdwaras from {}", gurdwaras.len(), path.display());
            gurdwaras
        }
        Err(e) => {
            error!("Error loading gurdwara data from {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

fn read_raw(path: &Path) -> Result<Vec<RawGurdwara>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Turn a raw record into the served shape
pub fn enrich(raw: &RawGurdwara, assets: &GurdwaraAssets) -> Gurdwara {
    Gurdwara {
        id: raw.id.clone(),
        name: raw.name.clone(),
        image_url: assets.image_for(&raw.id),
        brief_history: brief_history(&raw.content),
        full_history: raw.content.clone(),
        location: GurdwaraLocation {
            address: location_from_name(&raw.name).unwrap_or_default(),
            map_embed_url: None,
        },
        pdf_assets: assets.pdfs_for(&raw.id),
        visit_date: raw.visit_date.clone(),
        chronological_order: effective_order(raw.chronological_order.as_ref()),
    }
}

/// An absent or zero order sorts after every explicit order
pub fn effective_order(order: Option<&Number>) -> Number {
    match order {
        Some(n) if n.as_f64().is_some_and(|v| v != 0.0) => n.clone(),
        _ => Number::from(UNORDERED_SENTINEL),
    }
}

fn sort_key(order: &Number) -> f64 {
    order.as_f64().unwrap_or(f64::from(UNORDERED_SENTINEL))
}

/// First line of the content, cut to [`BRIEF_HISTORY_CHARS`] characters
pub fn brief_history(content: &str) -> String {
    let first_line = content.split('\n').next().unwrap_or_default();

    let mut chars = first_line.chars();
    let head: String = chars.by_ref().take(BRIEF_HISTORY_CHARS).collect();
    let truncated = chars.next().is_some();

    let mut brief = head.trim().to_string();
    if truncated {
        brief.push_str("...");
    }
    brief
}

/// Text inside the first parenthesised group of a name
pub fn location_from_name(name: &str) -> Option<String> {
    let open = name.find('(')?;
    let rest = &name[open + 1..];
    let close = rest.find(')')?;
    let inner = &rest[..close];
    if inner.is_empty() {
        None
    } else {
        Some(inner.to_string())
    }
}

/// Stable ascending sort by chronological order
pub fn sort_chronologically(gurdwaras: &mut [Gurdwara]) {
    gurdwaras.sort_by(|a, b| {
        sort_key(&a.chronological_order).total_cmp(&sort_key(&b.chronological_order))
    });
}
