use serde::Deserialize;

use crate::{MAX_MONSTERS_PER_ENCOUNTER, MonsterTemplate, PlayerSpec, ReshuffleMode};

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct EncounterTemplate {
    pub monsters: Vec<MonsterTemplate>,
}

impl EncounterTemplate {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.monsters.is_empty() || self.monsters.len() > *MAX_MONSTERS_PER_ENCOUNTER {
            anyhow::bail!(
                "encounter must have between 1 and {} monsters, got {}",
                *MAX_MONSTERS_PER_ENCOUNTER,
                self.monsters.len()
            );
        }
        if let Some(monster) = self.monsters.iter().find(|m| m.health == 0) {
            anyhow::bail!("monster {} must start with health above 0", monster.kind);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct SessionTemplate {
    pub player: PlayerSpec,
    pub encounters: Vec<EncounterTemplate>,
    #[serde(default)]
    pub shuffle: ReshuffleMode,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(skip, default)]
    pub source: Option<String>,
}

impl SessionTemplate {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str::<SessionTemplate>(s)?)
    }
}
