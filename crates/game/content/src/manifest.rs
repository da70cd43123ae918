//! Audio manifest: which clip file backs each cue key.
use std::collections::BTreeMap;

use feud_core::CueId;
use strum::IntoEnumIterator;

/// One audio clip the player display can load.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CueAsset {
    /// Cue key, e.g. `Buzzer`. Defaults to the stem of `file`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Clip path relative to the audio directory.
    pub file: String,
    #[cfg_attr(feature = "serde", serde(default = "CueAsset::default_volume"))]
    pub volume: f32,
}

impl CueAsset {
    pub const MAX_VOLUME: f32 = 2.0;

    pub fn new(name: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            volume: Self::default_volume(),
        }
    }

    pub const fn default_volume() -> f32 {
        1.0
    }
}

/// All clips known to the display, keyed by cue name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AudioManifest {
    assets: BTreeMap<String, CueAsset>,
}

impl AudioManifest {
    /// A later asset replaces an earlier one with the same name.
    /// [`AudioManifestLoader`](crate::AudioManifestLoader) refuses such files.
    pub fn new(assets: impl IntoIterator<Item = CueAsset>) -> Self {
        Self {
            assets: assets
                .into_iter()
                .map(|asset| (asset.name.clone(), asset))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&CueAsset> {
        self.assets.get(key)
    }

    pub fn contains(&self, cue: CueId) -> bool {
        self.assets.contains_key(cue.key())
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CueAsset> {
        self.assets.values()
    }

    /// Cues the show can request that have no clip in this manifest.
    pub fn missing_cues(&self) -> Vec<CueId> {
        CueId::iter().filter(|cue| !self.contains(*cue)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_exactly_the_missing_keys() {
        let manifest = AudioManifest::new(
            CueId::iter()
                .filter(|cue| !matches!(cue, CueId::IncorrectAnswer | CueId::Whoosh4))
                .map(|cue| CueAsset::new(cue.key(), format!("{}.wav", cue.key()))),
        );
        assert_eq!(
            manifest.missing_cues(),
            vec![CueId::IncorrectAnswer, CueId::Whoosh4]
        );
        assert!(manifest.get("Buzzer").is_none());
        assert!(manifest.get("MarioCoin").is_some());
    }

    #[test]
    fn empty_manifest_misses_everything() {
        let manifest = AudioManifest::default();
        assert_eq!(manifest.missing_cues().len(), CueId::iter().count());
    }
}
