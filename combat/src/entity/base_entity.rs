use super::EntityHealth;

/// Attributes shared by the player and every monster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    pub health: EntityHealth,
    pub block: u32,
    pub strength: u32,
    pub weak: u32,
    pub vulnerable: u32,
}

impl Entity {
    pub fn new(max_health: u32) -> Self {
        Self {
            health: EntityHealth::full(max_health),
            block: 0,
            strength: 0,
            weak: 0,
            vulnerable: 0,
        }
    }

    /// Applies an attack. Block soaks damage first and any remainder comes
    /// off health. Returns the health actually lost.
    pub fn reduce_health(&mut self, amount: u32) -> u32 {
        if amount <= self.block {
            self.block -= amount;
            return 0;
        }
        let overflow = amount - self.block;
        self.block = 0;
        let before = self.health.current();
        self.health -= overflow;
        before - self.health.current()
    }

    /// Block drops away and weak/vulnerable tick down. Strength persists.
    pub fn new_turn(&mut self) {
        self.block = 0;
        self.weak = self.weak.saturating_sub(1);
        self.vulnerable = self.vulnerable.saturating_sub(1);
    }

    pub fn is_defeated(&self) -> bool {
        self.health.is_depleted()
    }

    pub fn is_weak(&self) -> bool {
        self.weak > 0
    }

    pub fn is_vulnerable(&self) -> bool {
        self.vulnerable > 0
    }

    pub fn add_block(&mut self, amount: u32) {
        self.block = self.block.saturating_add(amount)
    }

    pub fn add_strength(&mut self, amount: u32) {
        self.strength = self.strength.saturating_add(amount)
    }

    pub fn add_weak(&mut self, amount: u32) {
        self.weak = self.weak.saturating_add(amount)
    }

    pub fn add_vulnerable(&mut self, amount: u32) {
        self.vulnerable = self.vulnerable.saturating_add(amount)
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "❤️ {}, 🛡️:{}, 💪:{}, 🥀:{}, 🎯:{}",
            self.health, self.block, self.strength, self.weak, self.vulnerable,
        )
    }
}
