use crate::{MonsterAction, MonsterId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combatant {
    Player,
    Monster(MonsterId),
}

impl std::fmt::Display for Combatant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Combatant::Player => write!(f, "Player"),
            Combatant::Monster(id) => write!(f, "Monster #{id}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CombatEvent {
    PlayCard(String),
    Act(MonsterAction),
    GainBlock(u32),
    GainStrength(u32),
    ApplyWeak(Combatant, u32),
    ApplyVulnerable(Combatant, u32),
    /// Target, attack after multipliers, health lost after block.
    DealDamage(Combatant, u32, u32),
    Defeated,
}

/// A combat event and the combatant that caused it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaggedCombatEvent(pub Combatant, pub CombatEvent);
