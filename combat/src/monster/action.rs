use indexmap::IndexMap;
use models::ActionEffect;

/// What a monster does on its turn: effect kind to magnitude, in the order
/// the behavior produced them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonsterAction(IndexMap<ActionEffect, u32>);

impl MonsterAction {
    pub fn damage(amount: u32) -> Self {
        Self::default().with(ActionEffect::Damage, amount)
    }

    pub fn with(mut self, effect: ActionEffect, amount: u32) -> Self {
        self.0.insert(effect, amount);
        self
    }

    pub fn get(&self, effect: ActionEffect) -> u32 {
        self.0.get(&effect).copied().unwrap_or(0)
    }

    pub fn contains(&self, effect: ActionEffect) -> bool {
        self.0.contains_key(&effect)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActionEffect, u32)> + '_ {
        self.0.iter().map(|(effect, amount)| (*effect, *amount))
    }
}

impl std::fmt::Display for MonsterAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let effects = self
            .iter()
            .map(|(effect, amount)| format!("{effect}: {amount}"))
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "{{{effects}}}")
    }
}
