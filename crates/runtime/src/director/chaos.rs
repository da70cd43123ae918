//! Chaos mode: random substitution of answer cues.
use feud_core::CueId;
use rand::Rng;

/// A bag of cues drawn without replacement, refilled once empty.
///
/// Every cue in the group plays once before any of them repeats.
#[derive(Clone, Debug)]
pub struct CueBag {
    all: &'static [CueId],
    left: Vec<CueId>,
}

impl CueBag {
    pub fn new(all: &'static [CueId]) -> Self {
        Self {
            all,
            left: all.to_vec(),
        }
    }

    /// Draws one cue. `None` only for a bag built from an empty group.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<CueId> {
        if self.left.is_empty() {
            self.left.extend_from_slice(self.all);
        }
        if self.left.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.left.len());
        Some(self.left.swap_remove(index))
    }

    pub fn remaining(&self) -> usize {
        self.left.len()
    }
}

/// Picks cues for reveals and the end theme.
#[derive(Clone, Debug)]
pub struct ChaosDeck {
    chance: f32,
    correct: CueBag,
    incorrect: CueBag,
}

impl ChaosDeck {
    /// `chance` is clamped to `[0, 1]`; NaN disables chaos.
    pub fn new(chance: f32) -> Self {
        let chance = if chance.is_nan() {
            0.0
        } else {
            chance.clamp(0.0, 1.0)
        };
        Self {
            chance,
            correct: CueBag::new(&CueId::CORRECT_ANSWER),
            incorrect: CueBag::new(&CueId::INCORRECT_ANSWER),
        }
    }

    pub fn chance(&self) -> f32 {
        self.chance
    }

    pub fn correct_cue<R: Rng + ?Sized>(&mut self, rng: &mut R) -> CueId {
        if self.roll(rng) {
            self.correct.draw(rng).unwrap_or(CueId::CorrectAnswer)
        } else {
            CueId::CorrectAnswer
        }
    }

    pub fn incorrect_cue<R: Rng + ?Sized>(&mut self, rng: &mut R) -> CueId {
        if self.roll(rng) {
            self.incorrect.draw(rng).unwrap_or(CueId::IncorrectAnswer)
        } else {
            CueId::IncorrectAnswer
        }
    }

    /// Theme that plays once a game is over.
    pub fn end_theme<R: Rng + ?Sized>(&mut self, rng: &mut R) -> CueId {
        if self.roll(rng) {
            CueId::AltTheme
        } else {
            CueId::ThemeNoIntro
        }
    }

    fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        // chance 0 must never substitute, even on a zero draw
        self.chance > 0.0 && rng.r#gen::<f32>() < self.chance
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::rng::ShowRng;

    #[test]
    fn zero_chance_always_plays_the_standard_cue() {
        let mut deck = ChaosDeck::new(0.0);
        let mut rng = ShowRng::new(1);
        for _ in 0..100 {
            assert_eq!(deck.correct_cue(&mut rng), CueId::CorrectAnswer);
            assert_eq!(deck.incorrect_cue(&mut rng), CueId::IncorrectAnswer);
            assert_eq!(deck.end_theme(&mut rng), CueId::ThemeNoIntro);
        }
    }

    #[test]
    fn full_chance_plays_every_cue_once_before_repeating() {
        let mut deck = ChaosDeck::new(1.0);
        let mut rng = ShowRng::new(9);

        let first: BTreeSet<_> = (0..CueId::CORRECT_ANSWER.len())
            .map(|_| deck.correct_cue(&mut rng))
            .collect();
        assert_eq!(first.len(), CueId::CORRECT_ANSWER.len());

        let second: BTreeSet<_> = (0..CueId::CORRECT_ANSWER.len())
            .map(|_| deck.correct_cue(&mut rng))
            .collect();
        assert_eq!(second, first);

        let strikes: BTreeSet<_> = (0..CueId::INCORRECT_ANSWER.len())
            .map(|_| deck.incorrect_cue(&mut rng))
            .collect();
        assert_eq!(strikes, CueId::INCORRECT_ANSWER.into_iter().collect());
        assert_eq!(deck.end_theme(&mut rng), CueId::AltTheme);
    }

    #[test]
    fn chance_is_clamped() {
        assert_eq!(ChaosDeck::new(3.0).chance(), 1.0);
        assert_eq!(ChaosDeck::new(-1.0).chance(), 0.0);
        assert_eq!(ChaosDeck::new(f32::NAN).chance(), 0.0);
    }
}
