use models::Card;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use serde::Deserialize;

/// How the discard pile is reordered when it is folded back into an empty
/// deck mid-draw.
#[derive(Clone, Debug)]
pub enum ReshufflePolicy {
    Random(StdRng),
    InOrder,
}

impl ReshufflePolicy {
    pub fn random() -> Self {
        Self::Random(StdRng::from_rng(&mut rand::rng()))
    }

    pub fn seeded(seed: u64) -> Self {
        Self::Random(StdRng::seed_from_u64(seed))
    }

    pub fn reshuffle(&mut self, cards: &mut [Card]) {
        match self {
            ReshufflePolicy::Random(rng) => cards.shuffle(rng),
            ReshufflePolicy::InOrder => {}
        }
    }
}

impl Default for ReshufflePolicy {
    fn default() -> Self {
        Self::random()
    }
}

/// Serializable selector for [`ReshufflePolicy`].
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReshuffleMode {
    #[default]
    Random,
    InOrder,
}

impl ReshuffleMode {
    pub fn into_policy(self, seed: Option<u64>) -> ReshufflePolicy {
        match (self, seed) {
            (ReshuffleMode::Random, Some(seed)) => ReshufflePolicy::seeded(seed),
            (ReshuffleMode::Random, None) => ReshufflePolicy::random(),
            (ReshuffleMode::InOrder, _) => ReshufflePolicy::InOrder,
        }
    }
}
