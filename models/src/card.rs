use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Status, name_key};

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String")]
pub enum CardKind {
    Strike,
    Defend,
    Bash,
    Neutralize,
    Survivor,
}

lazy_static::lazy_static! {
    /// Catalog entries keyed by their normalised name.
    pub static ref CARD_KIND_BY_NAME: IndexMap<String, CardKind> = CardKind::ALL
        .into_iter()
        .map(|kind| (name_key(kind.name()), kind))
        .collect();
}

impl CardKind {
    pub const ALL: [CardKind; 5] = [
        CardKind::Strike,
        CardKind::Defend,
        CardKind::Bash,
        CardKind::Neutralize,
        CardKind::Survivor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CardKind::Strike => "Strike",
            CardKind::Defend => "Defend",
            CardKind::Bash => "Bash",
            CardKind::Neutralize => "Neutralize",
            CardKind::Survivor => "Survivor",
        }
    }

    /// Builds a fresh card. Every call owns its own status modifiers.
    pub fn card(&self) -> Card {
        match self {
            CardKind::Strike => Card::new(*self, 6, 0, 1, &[], "Deal 6 damage.", true),
            CardKind::Defend => Card::new(*self, 0, 5, 1, &[], "Gain 5 block.", false),
            CardKind::Bash => Card::new(*self, 7, 5, 2, &[], "Deal 7 damage. Gain 5 block.", true),
            CardKind::Neutralize => Card::new(
                *self,
                3,
                0,
                0,
                &[(Status::Weak, 1), (Status::Vulnerable, 2)],
                "Deal 3 damage. Apply 1 weak and 2 vulnerable.",
                true,
            ),
            CardKind::Survivor => Card::new(
                *self,
                0,
                8,
                1,
                &[(Status::Strength, 1)],
                "Gain 8 block and 1 strength.",
                false,
            ),
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for CardKind {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        CARD_KIND_BY_NAME
            .get(&name_key(value))
            .copied()
            .ok_or_else(|| anyhow::anyhow!("unknown card {value:?}"))
    }
}

impl TryFrom<String> for CardKind {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CardKind::try_from(value.as_str())
    }
}

/// A playable card. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    kind: CardKind,
    damage: u32,
    block: u32,
    energy_cost: u32,
    status_modifiers: IndexMap<Status, u32>,
    description: &'static str,
    requires_target: bool,
}

impl Card {
    pub fn new(
        kind: CardKind,
        damage: u32,
        block: u32,
        energy_cost: u32,
        status_modifiers: &[(Status, u32)],
        description: &'static str,
        requires_target: bool,
    ) -> Self {
        Self {
            kind,
            damage,
            block,
            energy_cost,
            status_modifiers: status_modifiers.iter().copied().collect(),
            description,
            requires_target,
        }
    }

    pub fn kind(&self) -> CardKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn block(&self) -> u32 {
        self.block
    }

    pub fn energy_cost(&self) -> u32 {
        self.energy_cost
    }

    pub fn status_modifiers(&self) -> &IndexMap<Status, u32> {
        &self.status_modifiers
    }

    pub fn status(&self, status: Status) -> u32 {
        self.status_modifiers.get(&status).copied().unwrap_or(0)
    }

    pub fn strength(&self) -> u32 {
        self.status(Status::Strength)
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn requires_target(&self) -> bool {
        self.requires_target
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name(), self.description)
    }
}

/// Looks a card up in the catalog by name.
pub fn card_by_name(name: &str) -> anyhow::Result<Card> {
    Ok(CardKind::try_from(name)?.card())
}
