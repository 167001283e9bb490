//! Value objects - immutable types that represent domain concepts

mod config_kind;
mod snowflake;
mod status;

pub use config_kind::ConfigKind;
pub use snowflake::{Snowflake, SnowflakeParseError};
pub use status::ServiceStatus;
