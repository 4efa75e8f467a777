pub mod commanders;
pub mod fixtures;
pub mod init;
pub mod session;

#[allow(unused)]
pub use commanders::*;
#[allow(unused)]
pub use fixtures::*;
#[allow(unused)]
pub use session::*;
