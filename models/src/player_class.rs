use serde::Deserialize;

use crate::{CardKind, name_key};

/// Preset characters with a fixed max health and starting deck.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub enum PlayerClass {
    IronClad,
    Silent,
}

impl PlayerClass {
    pub const ALL: [PlayerClass; 2] = [PlayerClass::IronClad, PlayerClass::Silent];

    pub fn name(&self) -> &'static str {
        match self {
            PlayerClass::IronClad => "IronClad",
            PlayerClass::Silent => "Silent",
        }
    }

    pub fn max_health(&self) -> u32 {
        match self {
            PlayerClass::IronClad => 80,
            PlayerClass::Silent => 70,
        }
    }

    pub fn starting_deck(&self) -> Vec<CardKind> {
        let (strikes, defends, extras): (usize, usize, &[CardKind]) = match self {
            PlayerClass::IronClad => (5, 4, &[CardKind::Bash]),
            PlayerClass::Silent => (5, 5, &[CardKind::Neutralize, CardKind::Survivor]),
        };
        std::iter::repeat_n(CardKind::Strike, strikes)
            .chain(std::iter::repeat_n(CardKind::Defend, defends))
            .chain(extras.iter().copied())
            .collect()
    }
}

impl std::fmt::Display for PlayerClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for PlayerClass {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let key = name_key(value);
        PlayerClass::ALL
            .into_iter()
            .find(|class| name_key(class.name()) == key)
            .ok_or_else(|| anyhow::anyhow!("unknown player class {value:?}"))
    }
}

impl TryFrom<String> for PlayerClass {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PlayerClass::try_from(value.as_str())
    }
}
