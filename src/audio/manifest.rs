//! Sound manifest loading.
//!
//! Reads `assets/audio/sounds.json`, which maps cue keys to clip paths
//! relative to `assets/`, and preloads every clip.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const SOUND_MANIFEST_PATH: &str = "assets/audio/sounds.json";

/// Loaded audio handles keyed by cue.
#[derive(Resource, Default)]
pub struct SoundBank {
    pub version: u32,
    pub clips: HashMap<String, Handle<AudioSource>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SoundManifestJson {
    pub version: u32,
    pub sounds: HashMap<String, String>,
}

pub(crate) fn parse_manifest(contents: &str) -> Result<SoundManifestJson, serde_json::Error> {
    serde_json::from_str(contents)
}

impl SoundBank {
    /// Load the manifest and queue every listed clip on the asset server.
    ///
    /// A missing or malformed manifest leaves the bank empty; cues then play
    /// nothing.
    pub fn load_from_file(&mut self, path: &str, asset_server: &AssetServer) {
        let manifest_path = Path::new(path);

        if !manifest_path.exists() {
            warn!("Sound manifest not found at {:?}, sounds disabled", path);
            return;
        }

        let contents = match fs::read_to_string(manifest_path) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to read sound manifest: {}", e);
                return;
            }
        };

        let manifest = match parse_manifest(&contents) {
            Ok(m) => m,
            Err(e) => {
                error!("Failed to parse sound manifest: {}", e);
                return;
            }
        };

        self.version = manifest.version;
        for (key, clip_path) in manifest.sounds {
            if !Path::new("assets").join(&clip_path).exists() {
                warn!("Sound clip '{}' missing at {:?}, skipping", key, clip_path);
                continue;
            }
            let handle = asset_server.load(clip_path);
            self.clips.insert(key, handle);
        }

        info!(
            "Loaded sound manifest v{} with {} clips",
            self.version,
            self.clips.len()
        );
    }

    pub fn get(&self, key: &str) -> Option<Handle<AudioSource>> {
        self.clips.get(key).cloned()
    }
}

pub(crate) fn load_sound_bank(mut bank: ResMut<SoundBank>, asset_server: Res<AssetServer>) {
    bank.load_from_file(SOUND_MANIFEST_PATH, &asset_server);
}
