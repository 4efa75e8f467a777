use models::MonsterKind;
use serde::Deserialize;

/// One roster entry of an encounter: which monster, and its max health.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct MonsterTemplate {
    pub kind: MonsterKind,
    pub health: u32,
}

impl MonsterTemplate {
    pub fn new(kind: MonsterKind, health: u32) -> Self {
        Self { kind, health }
    }
}

impl TryFrom<(&str, u32)> for MonsterTemplate {
    type Error = anyhow::Error;

    fn try_from((kind, health): (&str, u32)) -> Result<Self, Self::Error> {
        Ok(Self::new(MonsterKind::try_from(kind)?, health))
    }
}
