//! Configuration loading from the process environment.

pub mod env;
pub mod policy;

pub use env::{ConfigError, EnvConfig};
pub use policy::PollPolicy;
