//! Literal content embedded in the binary
//!
//! The checked-in JSON documents under `data/` are compiled in with
//! `include_str!` and parsed once when the store is built.

use serde::de::DeserializeOwned;
use tegh_common::models::{
    AudioTrack, BiographySection, RaagInfo, Resource, Shabad, TimelineEvent,
};
use tegh_common::{Error, Result};

const TIMELINE_JSON: &str = include_str!("../../data/timeline.json");
const BIOGRAPHY_JSON: &str = include_str!("../../data/biography.json");
const SHABADS_JSON: &str = include_str!("../../data/shabads.json");
const RAAGS_JSON: &str = include_str!("../../data/raags.json");
const AUDIO_JSON: &str = include_str!("../../data/audio.json");
const RESOURCES_JSON: &str = include_str!("../../data/resources.json");

/// Literal collections, in source order
#[derive(Debug, Clone, Default)]
pub struct Seed {
    pub timeline: Vec<TimelineEvent>,
    pub biography_sections: Vec<BiographySection>,
    pub shabads: Vec<Shabad>,
    pub raags: Vec<RaagInfo>,
    pub audio_tracks: Vec<AudioTrack>,
    pub resources: Vec<Resource>,
}

impl Seed {
    /// Parse the embedded documents
    pub fn embedded() -> Result<Self> {
        Ok(Self {
            timeline: parse("timeline.json", TIMELINE_JSON)?,
            biography_sections: parse("biography.json", BIOGRAPHY_JSON)?,
            shabads: parse("shabads.json", SHABADS_JSON)?,
            raags: parse("raags.json", RAAGS_JSON)?,
            audio_tracks: parse("audio.json", AUDIO_JSON)?,
            resources: parse("resources.json", RESOURCES_JSON)?,
        })
    }
}

pub(crate) fn parse<T: DeserializeOwned>(name: &str, json: &str) -> Result<T> {
    serde_json::from_str(json)
        .map_err(|e| Error::Config(format!("Embedded document {} is malformed: {}", name, e)))
}
