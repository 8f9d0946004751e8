//! Flip state for a deck of quiz cards.

use crate::models::QuizCard;

#[derive(Debug, Clone, Default)]
pub struct QuizDeck {
    cards: Vec<QuizCard>,
    flipped: Vec<bool>,
}

impl QuizDeck {
    pub fn new(cards: Vec<QuizCard>) -> Self {
        let flipped = vec![false; cards.len()];
        Self { cards, flipped }
    }

    /// Builds a face-down deck from model output, keeping at most `limit`
    /// cards. Cards with a blank question, or whose answer is not one of
    /// their options, are dropped.
    pub fn from_generated(cards: Vec<QuizCard>, limit: usize) -> Self {
        let usable = cards
            .into_iter()
            .filter(|c| !c.question.trim().is_empty())
            .filter(|c| c.options.is_empty() || c.options.contains(&c.answer))
            .take(limit)
            .collect();
        Self::new(usable)
    }

    pub fn cards(&self) -> &[QuizCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Turns card `index` over and returns whether it now shows its answer.
    /// Out-of-range indices are ignored and report `false`.
    pub fn flip(&mut self, index: usize) -> bool {
        match self.flipped.get_mut(index) {
            Some(state) => {
                *state = !*state;
                *state
            }
            None => false,
        }
    }

    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped.get(index).copied().unwrap_or(false)
    }

    pub fn flipped(&self) -> &[bool] {
        &self.flipped
    }

    pub fn flipped_count(&self) -> usize {
        self.flipped.iter().filter(|f| **f).count()
    }

    pub fn reset(&mut self) {
        self.flipped.iter_mut().for_each(|f| *f = false);
    }
}
