use crate::model::card::Card;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Cards held by one player, kept in the order they were dealt.
///
/// Selection helpers resolve ties in favour of the earliest card so that the
/// same hand always yields the same pick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn remove(&mut self, card: Card) -> bool {
        if let Some(index) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn first(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    pub fn strongest(&self, vira: Card) -> Option<Card> {
        self.pick(vira, Ordering::Greater)
    }

    pub fn weakest(&self, vira: Card) -> Option<Card> {
        self.pick(vira, Ordering::Less)
    }

    /// Cheapest card that still beats `target` outright.
    pub fn cheapest_winner(&self, target: Card, vira: Card) -> Option<Card> {
        self.cards
            .iter()
            .copied()
            .filter(|card| card.compare(target, vira) == Ordering::Greater)
            .reduce(|best, card| {
                if card.compare(best, vira) == Ordering::Less {
                    card
                } else {
                    best
                }
            })
    }

    pub fn count_manilhas(&self, vira: Card) -> usize {
        self.cards
            .iter()
            .filter(|card| card.is_manilha(vira))
            .count()
    }

    fn pick(&self, vira: Card, replace_when: Ordering) -> Option<Card> {
        self.cards.iter().copied().reduce(|best, card| {
            if card.compare(best, vira) == replace_when {
                card
            } else {
                best
            }
        })
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::with_cards(iter.into_iter().collect())
    }
}
