pub use std::time::Duration;

pub use anyhow::{anyhow, bail, Context, Error};
pub use tracing::{error, info, instrument, warn, Level};

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
