/// Status counters a card can modify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    Strength,
    Weak,
    Vulnerable,
}

impl Status {
    pub fn name(&self) -> &'static str {
        match self {
            Status::Strength => "strength",
            Status::Weak => "weak",
            Status::Vulnerable => "vulnerable",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
