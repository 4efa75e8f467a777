use std::collections::VecDeque;

use models::Card;
use tracing::Level;

use crate::{ENERGY_PER_TURN, Entity, HAND_SIZE};

use super::ReshufflePolicy;

#[derive(Clone, Debug)]
pub struct Player {
    pub entity: Entity,
    energy: u32,
    deck: VecDeque<Card>,
    hand: Vec<Card>,
    discard: Vec<Card>,
    reshuffle: ReshufflePolicy,
}

impl Player {
    pub fn new(max_health: u32, cards: Vec<Card>) -> Self {
        Self {
            entity: Entity::new(max_health),
            energy: *ENERGY_PER_TURN,
            deck: cards.into(),
            hand: Vec::new(),
            discard: Vec::new(),
            reshuffle: ReshufflePolicy::default(),
        }
    }

    pub fn with_reshuffle(mut self, reshuffle: ReshufflePolicy) -> Self {
        self.reshuffle = reshuffle;
        self
    }

    pub fn energy(&self) -> u32 {
        self.energy
    }

    /// Front of the deck is the next card drawn.
    pub fn deck(&self) -> &VecDeque<Card> {
        &self.deck
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn discarded(&self) -> &[Card] {
        &self.discard
    }

    /// Every card the player owns, across deck, hand and discard.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.deck.iter().chain(self.hand.iter()).chain(self.discard.iter())
    }

    /// Folds the discard pile onto the end of the deck. Does nothing while
    /// cards are still in hand.
    pub fn start_new_encounter(&mut self) {
        if !self.hand.is_empty() {
            tracing::event!(
                name: "encounter reshuffle skipped",
                Level::DEBUG,
                hand = self.hand.len(),
            );
            return;
        }
        self.deck.extend(self.discard.drain(..));
    }

    pub fn end_turn(&mut self) {
        self.discard.append(&mut self.hand);
    }

    pub fn new_turn(&mut self) {
        self.entity.new_turn();
        self.energy = *ENERGY_PER_TURN;
        self.deal_hand();
    }

    fn deal_hand(&mut self) {
        for _ in 0..*HAND_SIZE {
            if self.deck.is_empty() {
                if self.discard.is_empty() {
                    break;
                }
                self.reshuffle.reshuffle(&mut self.discard);
                self.deck.extend(self.discard.drain(..));
            }
            if let Some(card) = self.deck.pop_front() {
                self.hand.push(card);
            }
        }
    }

    /// Spends the first card in hand called `name`. Returns `None` if no
    /// such card is held or it costs more than the remaining energy. Effects
    /// are resolved by the caller.
    pub fn play_card(&mut self, name: &str) -> Option<Card> {
        let position = self.hand.iter().position(|c| c.name() == name)?;
        let cost = self.hand[position].energy_cost();
        if cost > self.energy {
            tracing::event!(
                name: "insufficient energy",
                Level::DEBUG,
                card = name,
                cost,
                energy = self.energy,
            );
            return None;
        }
        self.energy -= cost;
        let card = self.hand.remove(position);
        self.discard.push(card.clone());
        Some(card)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hand = self
            .hand
            .iter()
            .map(|c| c.name())
            .collect::<Vec<&str>>()
            .join(", ");
        write!(f, "Player({}, ⚡:{}) [{hand}]", self.entity, self.energy)
    }
}
