/// The kinds of effect a monster action can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionEffect {
    Damage,
    Weak,
    Vulnerable,
    Strength,
}

impl ActionEffect {
    pub fn name(&self) -> &'static str {
        match self {
            ActionEffect::Damage => "damage",
            ActionEffect::Weak => "weak",
            ActionEffect::Vulnerable => "vulnerable",
            ActionEffect::Strength => "strength",
        }
    }
}

impl std::fmt::Display for ActionEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
