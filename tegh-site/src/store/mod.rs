//! In-memory content store
//!
//! Built once at startup and shared read-only across request handlers.
//! Literal collections come from the JSON documents embedded by [`seed`];
//! gurdwara records, the baani text and the optional baani raag groupings
//! are read from the content directory.
//!
//! Lookups never fail: an unknown id is `None`, a filter with no matches is
//! an empty list.

use std::path::Path;

use tegh_common::models::{
    AudioTrack, BaaniPage, BaaniRaag, BiographySection, Gurdwara, RaagInfo, Resource, Shabad,
    TimelineEvent,
};
use tegh_common::Result;
use tracing::info;

pub mod baani;
pub mod gurdwaras;
pub mod seed;

pub use gurdwaras::{GurdwaraAssets, RawGurdwara, UNORDERED_SENTINEL};
pub use seed::Seed;

pub use tegh_common::config::{BAANI_RAAGS_FILE, BAANI_TEXT_FILE, GURDWARA_DATA_FILE};

/// Read-only collections served by the API
#[derive(Debug, Clone)]
pub struct ContentStore {
    timeline: Vec<TimelineEvent>,
    biography_sections: Vec<BiographySection>,
    shabads: Vec<Shabad>,
    raags: Vec<RaagInfo>,
    audio_tracks: Vec<AudioTrack>,
    gurdwaras: Vec<Gurdwara>,
    resources: Vec<Resource>,
    baani_pages: Vec<BaaniPage>,
    baani_raags: Vec<BaaniRaag>,
    baani_text: String,
}

impl ContentStore {
    /// Load the store from the embedded documents and `content_dir`
    ///
    /// Fails only if an embedded document is malformed. Problems with the
    /// content directory are logged and degrade to empty/fallback content.
    pub fn load(content_dir: &Path) -> Result<Self> {
        let seed = Seed::embedded()?;
        let assets = GurdwaraAssets::embedded()?;

        let gurdwaras = gurdwaras::load_gurdwaras(&content_dir.join(GURDWARA_DATA_FILE), &assets);
        let baani_text = baani::load_baani_text(&content_dir.join(BAANI_TEXT_FILE));
        let baani_raags = baani::load_baani_raags(&content_dir.join(BAANI_RAAGS_FILE));

        let store = Self::from_parts(seed, gurdwaras, baani_text).with_baani_raags(baani_raags);
        store.log_summary();
        Ok(store)
    }

    /// Assemble a store from already-loaded parts
    ///
    /// Gurdwaras are put in chronological order here, whatever order they
    /// arrive in.
    pub fn from_parts(seed: Seed, mut gurdwaras: Vec<Gurdwara>, baani_text: String) -> Self {
        gurdwaras::sort_chronologically(&mut gurdwaras);

        Self {
            timeline: seed.timeline,
            biography_sections: seed.biography_sections,
            shabads: seed.shabads,
            raags: seed.raags,
            audio_tracks: seed.audio_tracks,
            gurdwaras,
            resources: seed.resources,
            baani_pages: baani::generate_pages(),
            baani_raags: Vec::new(),
            baani_text,
        }
    }

    /// Replace the text-based baani raag groupings
    pub fn with_baani_raags(mut self, baani_raags: Vec<BaaniRaag>) -> Self {
        self.baani_raags = baani_raags;
        self
    }

    fn log_summary(&self) {
        info!(
            "Content loaded: {} timeline events, {} biography sections, {} shabads, {} raags, \
             {} audio tracks, {} gurdwaras, {} resources, {} baani pages, {} baani raags, \
             baani text {} chars",
            self.timeline.len(),
            self.biography_sections.len(),
            self.shabads.len(),
            self.raags.len(),
            self.audio_tracks.len(),
            self.gurdwaras.len(),
            self.resources.len(),
            self.baani_pages.len(),
            self.baani_raags.len(),
            self.baani_text.chars().count(),
        );
    }

    // ---- Biography ----

    pub fn timeline(&self) -> &[TimelineEvent] {
        &self.timeline
    }

    pub fn biography_sections(&self) -> &[BiographySection] {
        &self.biography_sections
    }

    // ---- Shabads and raags ----

    pub fn shabads(&self) -> &[Shabad] {
        &self.shabads
    }

    pub fn shabad(&self, id: &str) -> Option<&Shabad> {
        self.shabads.iter().find(|s| s.id == id)
    }

    pub fn raags(&self) -> &[RaagInfo] {
        &self.raags
    }

    pub fn raag(&self, id: &str) -> Option<&RaagInfo> {
        self.raags.iter().find(|r| r.id == id)
    }

    /// Shabads whose `raag_id` equals `raag_id`, in source order
    pub fn shabads_for_raag(&self, raag_id: &str) -> Vec<&Shabad> {
        self.shabads.iter().filter(|s| s.raag_id == raag_id).collect()
    }

    // ---- Audio ----

    pub fn audio_tracks(&self) -> &[AudioTrack] {
        &self.audio_tracks
    }

    // ---- Gurdwaras ----

    /// Gurdwaras in ascending chronological order
    pub fn gurdwaras(&self) -> &[Gurdwara] {
        &self.gurdwaras
    }

    pub fn gurdwara(&self, id: &str) -> Option<&Gurdwara> {
        self.gurdwaras.iter().find(|g| g.id == id)
    }

    // ---- Resources ----

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn resources_by_category(&self, category: &str) -> Vec<&Resource> {
        self.resources
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    // ---- Baani ----

    pub fn baani_text(&self) -> &str {
        &self.baani_text
    }

    pub fn baani_pages(&self) -> &[BaaniPage] {
        &self.baani_pages
    }

    pub fn baani_page(&self, id: &str) -> Option<&BaaniPage> {
        self.baani_pages.iter().find(|p| p.id == id)
    }

    pub fn baani_page_by_number(&self, page_number: i64) -> Option<&BaaniPage> {
        self.baani_pages
            .iter()
            .find(|p| p.page_number == page_number)
    }

    pub fn baani_raags(&self) -> &[BaaniRaag] {
        &self.baani_raags
    }

    pub fn baani_raag(&self, id: &str) -> Option<&BaaniRaag> {
        self.baani_raags.iter().find(|r| r.id == id)
    }
}
