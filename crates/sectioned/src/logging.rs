//! Tracing integration.
//!
//! Sectioned emits `tracing` events when groups are created, replaced or
//! removed (`debug`), when individual rows move in or out (`trace`) and when
//! a name collision is rejected (`warn`). The library never installs a
//! subscriber; applications do that themselves:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("sectioned::sequence=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Group and row mutations.
    pub const SEQUENCE: &str = "sectioned::sequence";
    /// Bulk loading from JSON or TOML.
    pub const LOAD: &str = "sectioned::load";
    /// Lock-guarded shared access.
    pub const SHARED: &str = "sectioned::shared";
}
