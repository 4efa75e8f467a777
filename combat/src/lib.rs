pub mod combat_event;
pub mod dispatch;
pub mod encounter;
pub mod entity;
pub mod monster;
pub mod player;
pub mod result;
pub mod session;
pub mod statics;
pub mod summary;
pub mod template;

pub use combat_event::*;
pub use dispatch::*;
pub use encounter::*;
pub use entity::*;
pub use monster::*;
pub use player::*;
pub use result::*;
pub use session::*;
pub use statics::*;
pub use summary::*;
pub use template::*;

/// Installs a stderr subscriber filtered by `RUST_LOG`.
#[cfg(feature = "trace")]
pub fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to install tracing subscriber: {error}"))
}
