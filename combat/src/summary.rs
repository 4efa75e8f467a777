use models::MonsterKind;

use crate::{Monster, MonsterId, Player};

/// Read-only view of a living monster for presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonsterSummary {
    pub id: MonsterId,
    pub kind: MonsterKind,
    pub health: u32,
    pub max_health: u32,
    pub block: u32,
    pub strength: u32,
    pub weak: u32,
    pub vulnerable: u32,
}

impl From<&Monster> for MonsterSummary {
    fn from(value: &Monster) -> Self {
        Self {
            id: value.id,
            kind: value.kind(),
            health: value.entity.health.current(),
            max_health: value.entity.health.max(),
            block: value.entity.block,
            strength: value.entity.strength,
            weak: value.entity.weak,
            vulnerable: value.entity.vulnerable,
        }
    }
}

impl std::fmt::Display for MonsterSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Monster<id={}, kind={}, health={}/{}, block={}, strength={}, weak={}, vulnerable={}>",
            self.id,
            self.kind,
            self.health,
            self.max_health,
            self.block,
            self.strength,
            self.weak,
            self.vulnerable,
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerSummary {
    pub health: u32,
    pub max_health: u32,
    pub block: u32,
    pub strength: u32,
    pub weak: u32,
    pub vulnerable: u32,
    pub energy: u32,
    pub hand: Vec<String>,
    pub deck_size: usize,
    pub discard_size: usize,
}

impl From<&Player> for PlayerSummary {
    fn from(value: &Player) -> Self {
        Self {
            health: value.entity.health.current(),
            max_health: value.entity.health.max(),
            block: value.entity.block,
            strength: value.entity.strength,
            weak: value.entity.weak,
            vulnerable: value.entity.vulnerable,
            energy: value.energy(),
            hand: value.hand().iter().map(|c| c.name().to_string()).collect(),
            deck_size: value.deck().len(),
            discard_size: value.discarded().len(),
        }
    }
}
