pub mod base_entity;
pub mod damage;
pub mod health;

pub use base_entity::*;
pub use damage::*;
pub use health::*;
