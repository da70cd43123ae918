//! Startup check that every cue the show can request has a clip.
use std::collections::BTreeMap;

use feud_content::AudioManifest;
use feud_core::{CueGroup, CueId};

use crate::api::{Result, RuntimeError};

/// Fails with the complete list of cue keys absent from `manifest`.
pub fn verify_cues(manifest: &AudioManifest) -> Result<()> {
    let missing = manifest.missing_cues();
    if missing.is_empty() {
        tracing::debug!(assets = manifest.len(), "audio manifest covers every cue");
        return Ok(());
    }

    for (group, cues) in group_cues(&missing) {
        let keys: Vec<&str> = cues.iter().map(|cue| cue.key()).collect();
        tracing::error!(%group, missing = ?keys, "audio manifest is missing cues");
    }
    Err(RuntimeError::MissingCues { missing })
}

/// Buckets cues by [`CueGroup`], keeping their order inside each bucket.
pub fn group_cues(cues: &[CueId]) -> BTreeMap<CueGroup, Vec<CueId>> {
    let mut groups: BTreeMap<CueGroup, Vec<CueId>> = BTreeMap::new();
    for &cue in cues {
        groups.entry(cue.group()).or_default().push(cue);
    }
    groups
}
