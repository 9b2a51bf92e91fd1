//! Baani text, scanned pages and raag groupings

use std::path::Path;

use tegh_common::models::{BaaniPage, BaaniRaag};
use tegh_common::Result;
use tracing::{debug, error, info};

/// Served in place of the baani text when `baani.txt` cannot be read
pub const BAANI_TEXT_FALLBACK: &str = "ਬਾਣੀ ਲੋਡ ਕਰਨ ਵਿੱਚ ਤਰੁੱਟੀ";

/// Number of scanned pages in the printed baani
pub const BAANI_PAGE_COUNT: i64 = 64;

const PAGE_IMAGE_PREFIX: &str =
    "/attached_assets/baani_pages/BaniSriGuruTeghBahadurSahibJi_1763483333430_page_";

/// Page records for pages 1..=64
///
/// Image files are numbered one ahead of the page; the first scan is the
/// cover.
pub fn generate_pages() -> Vec<BaaniPage> {
    (1..=BAANI_PAGE_COUNT)
        .map(|n| BaaniPage {
            id: format!("baani-page-{}", n),
            page_number: n,
            image_url: format!("{}{}.png", PAGE_IMAGE_PREFIX, n + 1),
            title: format!("ਬਾਣੀ - ਪੰਨਾ {}", n),
        })
        .collect()
}

/// Read the full baani text, or the fallback message if it is unreadable
pub fn load_baani_text(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            info!(
                "Loaded baani text from {} ({} chars)",
                path.display(),
                text.chars().count()
            );
            text
        }
        Err(e) => {
            error!("Error loading baani text from {}: {}", path.display(), e);
            BAANI_TEXT_FALLBACK.to_string()
        }
    }
}

/// Read the optional raag groupings, sorted by `order`
///
/// The file is optional; absence is not an error.
pub fn load_baani_raags(path: &Path) -> Vec<BaaniRaag> {
    if !path.exists() {
        debug!("No baani raag groupings at {}", path.display());
        return Vec::new();
    }

    match read_raags(path) {
        Ok(mut raags) => {
            raags.sort_by_key(|r| r.order);
            for raag in &mut raags {
                raag.shabads.sort_by_key(|s| s.order);
            }
            info!("Loaded {} baani raags from {}", raags.len(), path.display());
            raags
        }
        Err(e) => {
            error!("Error loading baani raags from {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

fn read_raags(path: &Path) -> Result<Vec<BaaniRaag>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
