use models::{CardKind, PlayerClass};
use serde::Deserialize;

use super::{Player, ReshufflePolicy};

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PlayerTemplate {
    pub health: u32,
    #[serde(default)]
    pub cards: Vec<CardKind>,
}

impl PlayerTemplate {
    pub fn create_player(self, reshuffle: ReshufflePolicy) -> anyhow::Result<Player> {
        if self.health == 0 {
            anyhow::bail!("player must start with health above 0");
        }
        let cards = self.cards.iter().map(CardKind::card).collect();
        Ok(Player::new(self.health, cards).with_reshuffle(reshuffle))
    }
}

impl From<PlayerClass> for PlayerTemplate {
    fn from(class: PlayerClass) -> Self {
        Self {
            health: class.max_health(),
            cards: class.starting_deck(),
        }
    }
}

/// Either a preset class name or an explicit template.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PlayerSpec {
    Class(PlayerClass),
    Custom(PlayerTemplate),
}

impl From<PlayerSpec> for PlayerTemplate {
    fn from(spec: PlayerSpec) -> Self {
        match spec {
            PlayerSpec::Class(class) => class.into(),
            PlayerSpec::Custom(template) => template,
        }
    }
}
