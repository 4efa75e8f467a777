use models::{ActionEffect, MonsterKind};

use crate::{CULTIST_BASE_DAMAGE, Entity};

use super::MonsterAction;

/// Per-instance state driving a monster's actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Behavior {
    /// Hits for the same amount every turn, rolled once at creation.
    Louse { damage: u32 },
    /// Opens with a zero-damage turn, then hits for 7 and ramps by one each
    /// turn. Applies 1 weak whenever the hit is odd.
    Cultist { calls_so_far: u32, damage: u32 },
    /// Blocks with half its missing health (rounded up) and hits with the
    /// other half (rounded down).
    JawWorm,
}

impl Behavior {
    pub fn kind(&self) -> MonsterKind {
        match self {
            Behavior::Louse { .. } => MonsterKind::Louse,
            Behavior::Cultist { .. } => MonsterKind::Cultist,
            Behavior::JawWorm => MonsterKind::JawWorm,
        }
    }

    pub fn act(&mut self, entity: &mut Entity) -> MonsterAction {
        match self {
            Behavior::Louse { damage } => MonsterAction::damage(*damage),
            Behavior::Cultist {
                calls_so_far,
                damage,
            } => {
                *damage = match *calls_so_far {
                    0 => 0,
                    1 => *CULTIST_BASE_DAMAGE + 1,
                    _ => *damage + 1,
                };
                *calls_so_far += 1;
                MonsterAction::damage(*damage).with(ActionEffect::Weak, *damage % 2)
            }
            Behavior::JawWorm => {
                let lost = entity.health.lost();
                entity.add_block(lost.div_ceil(2));
                MonsterAction::damage(lost / 2)
            }
        }
    }
}
