pub mod base_player;
pub mod reshuffle;
pub mod template;

pub use base_player::*;
pub use reshuffle::*;
pub use template::*;
