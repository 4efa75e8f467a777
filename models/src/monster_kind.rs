use serde::Deserialize;

use crate::name_key;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub enum MonsterKind {
    Louse,
    Cultist,
    JawWorm,
}

impl MonsterKind {
    pub const ALL: [MonsterKind; 3] = [MonsterKind::Louse, MonsterKind::Cultist, MonsterKind::JawWorm];

    pub fn name(&self) -> &'static str {
        match self {
            MonsterKind::Louse => "Louse",
            MonsterKind::Cultist => "Cultist",
            MonsterKind::JawWorm => "JawWorm",
        }
    }
}

impl std::fmt::Display for MonsterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for MonsterKind {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let key = name_key(value);
        MonsterKind::ALL
            .into_iter()
            .find(|kind| name_key(kind.name()) == key)
            .ok_or_else(|| anyhow::anyhow!("unknown monster kind {value:?}"))
    }
}

impl TryFrom<String> for MonsterKind {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        MonsterKind::try_from(value.as_str())
    }
}
