pub mod action;
pub mod base_monster;
pub mod behavior;
pub mod factory;
pub mod id;
pub mod template;

pub use action::*;
pub use base_monster::*;
pub use behavior::*;
pub use factory::*;
pub use id::*;
pub use template::*;
