use models::MonsterKind;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::LOUSE_DAMAGE;

use super::{Behavior, Monster, MonsterId, MonsterTemplate};

/// Builds monsters, assigning ids from its own counter and rolling any
/// per-instance randomness from its own rng.
#[derive(Clone, Debug)]
pub struct MonsterFactory {
    next_id: u64,
    rng: StdRng,
}

impl MonsterFactory {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_rng(&mut rand::rng()))
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self { next_id: 0, rng }
    }

    pub fn next_id(&mut self) -> MonsterId {
        let id = MonsterId::from(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn create(&mut self, template: &MonsterTemplate) -> Monster {
        let id = self.next_id();
        let behavior = match template.kind {
            MonsterKind::Louse => Behavior::Louse {
                damage: self.rng.random_range(LOUSE_DAMAGE.clone()),
            },
            MonsterKind::Cultist => Behavior::Cultist {
                calls_so_far: 0,
                damage: 0,
            },
            MonsterKind::JawWorm => Behavior::JawWorm,
        };
        Monster::new(id, template.health, behavior)
    }
}

impl Default for MonsterFactory {
    fn default() -> Self {
        Self::new()
    }
}
