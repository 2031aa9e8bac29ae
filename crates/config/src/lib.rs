mod config;
mod site;
mod theme;
mod value;

pub use self::config::*;
pub use self::site::*;
pub use self::theme::*;

/// Opaque configuration value, passed through to the export untouched
pub type Value = serde_json::Value;

/// Unrecognized keys of a configuration record
pub type Extra = serde_json::Map<String, Value>;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
