use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// The 40-card Spanish-suited deck Truco is played with.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub const SIZE: usize = 40;

    pub fn truco() -> Self {
        let mut cards = Vec::with_capacity(Self::SIZE);
        for suit in Suit::ALL.iter().copied() {
            for rank in Rank::ORDERED.iter().copied() {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::truco();
        deck.shuffle_in_place(rng);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Takes the top card off the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Takes up to `count` cards off the top, in draw order.
    pub fn draw_many(&mut self, count: usize) -> Vec<Card> {
        let keep = self.cards.len().saturating_sub(count);
        let mut drawn = self.cards.split_off(keep);
        drawn.reverse();
        drawn
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Deck;
    use std::collections::HashSet;

    #[test]
    fn truco_deck_has_40_unique_cards() {
        let deck = Deck::truco();
        let unique: HashSet<_> = deck.cards().iter().copied().collect();
        assert_eq!(deck.len(), Deck::SIZE);
        assert_eq!(unique.len(), Deck::SIZE);
    }

    #[test]
    fn shuffle_with_seed_is_deterministic() {
        let deck_a = Deck::shuffled_with_seed(42);
        let deck_b = Deck::shuffled_with_seed(42);
        assert_eq!(deck_a.cards(), deck_b.cards());
    }

    #[test]
    fn shuffle_with_different_seeds_differs() {
        let deck_a = Deck::shuffled_with_seed(1);
        let deck_b = Deck::shuffled_with_seed(2);
        assert_ne!(deck_a.cards(), deck_b.cards());
    }

    #[test]
    fn draws_come_off_the_top() {
        let mut deck = Deck::shuffled_with_seed(7);
        let top = *deck.cards().last().expect("non-empty deck");
        assert_eq!(deck.draw(), Some(top));

        let next_three: Vec<_> = deck.cards().iter().rev().take(3).copied().collect();
        assert_eq!(deck.draw_many(3), next_three);
        assert_eq!(deck.len(), Deck::SIZE - 4);

        let rest = deck.draw_many(100);
        assert_eq!(rest.len(), Deck::SIZE - 4);
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
    }
}
