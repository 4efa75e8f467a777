pub mod card;
pub mod effect;
pub mod monster_kind;
pub mod name;
pub mod player_class;
pub mod status;

pub use card::*;
pub use effect::*;
pub use monster_kind::*;
pub use name::*;
pub use player_class::*;
pub use status::*;
