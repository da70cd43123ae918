//! Prompt selection for upcoming rounds.
//!
//! Selection is two-step: the producer picks a *pending* prompt (and may
//! change their mind any number of times), then commits it when the round
//! starts. Committing removes the prompt from the remaining pool for the rest
//! of the session. A committed prompt becomes *active* and can start exactly
//! one round.
use std::collections::BTreeSet;

use rand::Rng;

use crate::config::ReplayPolicy;
use crate::error::RoundError;
use crate::prompt::{PromptId, PromptStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ActivePrompt {
    id: PromptId,
    claimed: bool,
}

/// Tracks which prompts remain unplayed and which one is up next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundSelector {
    all: BTreeSet<PromptId>,
    remaining: BTreeSet<PromptId>,
    played: Vec<PromptId>,
    pending: Option<PromptId>,
    active: Option<ActivePrompt>,
    replay: ReplayPolicy,
}

impl RoundSelector {
    /// Creates a selector over an explicit id set.
    pub fn new(ids: impl IntoIterator<Item = PromptId>, replay: ReplayPolicy) -> Self {
        let all: BTreeSet<PromptId> = ids.into_iter().collect();
        Self {
            remaining: all.clone(),
            all,
            played: Vec::new(),
            pending: None,
            active: None,
            replay,
        }
    }

    /// Creates a selector over every prompt in the store.
    pub fn for_store(store: &PromptStore, replay: ReplayPolicy) -> Self {
        Self::new(store.ids(), replay)
    }

    /// Unplayed prompt ids, in id order.
    pub fn remaining(&self) -> &BTreeSet<PromptId> {
        &self.remaining
    }

    /// Prompts committed this session, in the order they were played.
    pub fn played(&self) -> &[PromptId] {
        &self.played
    }

    pub fn is_played(&self, id: PromptId) -> bool {
        self.all.contains(&id) && !self.remaining.contains(&id)
    }

    pub fn pending(&self) -> Option<PromptId> {
        self.pending
    }

    /// The most recently committed prompt.
    pub fn active(&self) -> Option<PromptId> {
        self.active.map(|active| active.id)
    }

    /// The committed prompt if no round has been started with it yet.
    pub fn unclaimed(&self) -> Option<PromptId> {
        self.active
            .filter(|active| !active.claimed)
            .map(|active| active.id)
    }

    pub fn replay_policy(&self) -> ReplayPolicy {
        self.replay
    }

    /// Records `id` as the next prompt without touching the pool.
    pub fn select_explicit(&mut self, id: PromptId) -> Result<(), RoundError> {
        if !self.all.contains(&id) {
            return Err(RoundError::InvalidId(id));
        }
        self.pending = Some(id);
        Ok(())
    }

    /// Draws one id uniformly from the remaining pool and records it as pending.
    pub fn select_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<PromptId, RoundError> {
        if self.remaining.is_empty() {
            return Err(RoundError::NoPromptsAvailable);
        }
        let index = rng.gen_range(0..self.remaining.len());
        let id = self
            .remaining
            .iter()
            .nth(index)
            .copied()
            .ok_or(RoundError::NoPromptsAvailable)?;
        self.pending = Some(id);
        Ok(id)
    }

    /// Commits the pending prompt: it leaves the pool and becomes active.
    pub fn commit_pending(&mut self) -> Result<PromptId, RoundError> {
        let id = self.check_commit()?;

        if self.remaining.remove(&id) {
            self.played.push(id);
        }
        self.active = Some(ActivePrompt { id, claimed: false });
        self.pending = None;
        Ok(id)
    }

    /// Restores the full pool and forgets any selection.
    pub fn reset(&mut self) {
        self.remaining = self.all.clone();
        self.played.clear();
        self.pending = None;
        self.active = None;
    }

    /// Validates that the pending prompt could be committed right now.
    pub(crate) fn check_commit(&self) -> Result<PromptId, RoundError> {
        let id = self.pending.ok_or(RoundError::NoPendingPrompt)?;
        if self.replay == ReplayPolicy::Forbid && !self.remaining.contains(&id) {
            return Err(RoundError::PromptAlreadyPlayed(id));
        }
        Ok(id)
    }

    /// Validates that a round may start with `id`.
    pub(crate) fn check_claim(&self, id: PromptId) -> Result<(), RoundError> {
        match self.active {
            Some(active) if active.id == id && !active.claimed => Ok(()),
            _ => Err(RoundError::PromptNotCommitted(id)),
        }
    }

    /// Marks the active prompt as used by a round.
    pub(crate) fn claim(&mut self, id: PromptId) -> Result<(), RoundError> {
        self.check_claim(id)?;
        if let Some(active) = self.active.as_mut() {
            active.claimed = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn selector(n: u32) -> RoundSelector {
        RoundSelector::new((0..n).map(PromptId), ReplayPolicy::Forbid)
    }

    #[test]
    fn explicit_selection_does_not_touch_pool() {
        let mut sel = selector(3);
        sel.select_explicit(PromptId(1)).unwrap();
        assert_eq!(sel.pending(), Some(PromptId(1)));
        assert_eq!(sel.remaining().len(), 3);
        assert_eq!(sel.active(), None);
    }

    #[test]
    fn explicit_selection_rejects_unknown_ids() {
        let mut sel = selector(3);
        sel.select_explicit(PromptId(0)).unwrap();
        assert_eq!(
            sel.select_explicit(PromptId(3)),
            Err(RoundError::InvalidId(PromptId(3)))
        );
        assert_eq!(sel.pending(), Some(PromptId(0)));
    }

    #[test]
    fn commit_moves_pending_to_active() {
        let mut sel = selector(3);
        sel.select_explicit(PromptId(1)).unwrap();
        assert_eq!(sel.commit_pending(), Ok(PromptId(1)));

        assert_eq!(sel.active(), Some(PromptId(1)));
        assert_eq!(sel.pending(), None);
        assert_eq!(
            sel.remaining().iter().copied().collect::<Vec<_>>(),
            vec![PromptId(0), PromptId(2)]
        );
        assert_eq!(sel.played(), &[PromptId(1)]);
    }

    #[test]
    fn second_commit_without_selection_fails() {
        let mut sel = selector(3);
        sel.select_explicit(PromptId(1)).unwrap();
        sel.commit_pending().unwrap();
        assert_eq!(sel.commit_pending(), Err(RoundError::NoPendingPrompt));
    }

    #[test]
    fn played_prompt_cannot_be_committed_again_by_default() {
        let mut sel = selector(2);
        sel.select_explicit(PromptId(0)).unwrap();
        sel.commit_pending().unwrap();

        sel.select_explicit(PromptId(0)).unwrap();
        let before = sel.clone();
        assert_eq!(
            sel.commit_pending(),
            Err(RoundError::PromptAlreadyPlayed(PromptId(0)))
        );
        assert_eq!(sel, before);
    }

    #[test]
    fn replay_policy_allows_recommitting_played_prompt() {
        let mut sel = RoundSelector::new((0..2).map(PromptId), ReplayPolicy::Allow);
        sel.select_explicit(PromptId(0)).unwrap();
        sel.commit_pending().unwrap();

        sel.select_explicit(PromptId(0)).unwrap();
        assert_eq!(sel.commit_pending(), Ok(PromptId(0)));
        assert_eq!(sel.played(), &[PromptId(0)]);
        assert_eq!(sel.remaining().len(), 1);
    }

    #[test]
    fn random_selection_on_empty_pool_fails_without_change() {
        let mut sel = selector(1);
        sel.select_explicit(PromptId(0)).unwrap();
        sel.commit_pending().unwrap();

        let before = sel.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(
            sel.select_random(&mut rng),
            Err(RoundError::NoPromptsAvailable)
        );
        assert_eq!(sel, before);
    }

    #[test]
    fn random_selection_draws_from_remaining() {
        let mut sel = selector(5);
        sel.select_explicit(PromptId(2)).unwrap();
        sel.commit_pending().unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            let id = sel.select_random(&mut rng).unwrap();
            assert_ne!(id, PromptId(2));
            assert!(sel.remaining().contains(&id));
            assert_eq!(sel.pending(), Some(id));
        }
    }

    #[test]
    fn claim_is_single_use() {
        let mut sel = selector(2);
        sel.select_explicit(PromptId(1)).unwrap();
        sel.commit_pending().unwrap();

        assert_eq!(
            sel.claim(PromptId(0)),
            Err(RoundError::PromptNotCommitted(PromptId(0)))
        );
        assert_eq!(sel.claim(PromptId(1)), Ok(()));
        assert_eq!(sel.unclaimed(), None);
        assert_eq!(
            sel.claim(PromptId(1)),
            Err(RoundError::PromptNotCommitted(PromptId(1)))
        );
    }

    #[test]
    fn reset_restores_full_pool() {
        let mut sel = selector(3);
        sel.select_explicit(PromptId(1)).unwrap();
        sel.commit_pending().unwrap();
        sel.select_explicit(PromptId(2)).unwrap();

        sel.reset();
        assert_eq!(sel.remaining().len(), 3);
        assert_eq!(sel.pending(), None);
        assert_eq!(sel.active(), None);
        assert!(sel.played().is_empty());
    }
}
