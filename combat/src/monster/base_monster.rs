use models::MonsterKind;
use tracing::Level;

use crate::Entity;

use super::{Behavior, MonsterAction, MonsterId};

#[derive(Clone, Debug)]
pub struct Monster {
    pub id: MonsterId,
    pub entity: Entity,
    pub behavior: Behavior,
}

impl Monster {
    pub fn new(id: MonsterId, max_health: u32, behavior: Behavior) -> Self {
        Self {
            id,
            entity: Entity::new(max_health),
            behavior,
        }
    }

    pub fn kind(&self) -> MonsterKind {
        self.behavior.kind()
    }

    pub fn is_defeated(&self) -> bool {
        self.entity.is_defeated()
    }

    pub fn action(&mut self) -> MonsterAction {
        let action = self.behavior.act(&mut self.entity);
        tracing::event!(
            name: "monster action",
            Level::DEBUG,
            id = %self.id,
            kind = %self.kind(),
            %action,
        );
        action
    }
}

impl PartialEq for Monster {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Monster {}

impl std::fmt::Display for Monster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} #{}: {}", self.kind(), self.id, self.entity.health)
    }
}
