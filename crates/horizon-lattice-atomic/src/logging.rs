//! Tracing targets for the atomic engine.
//!
//! The engine emits `tracing` events only; install a subscriber in the host
//! application to see them:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_lattice_atomic::resolve=trace")
//!     .init();
//! ```

/// Target names for log filtering.
pub mod targets {
    /// Token resolution (rule attempts, outcomes).
    pub const RESOLVE: &str = "horizon_lattice_atomic::resolve";
    /// Declaration collection and property registration.
    pub const COLLECT: &str = "horizon_lattice_atomic::collect";
    /// Theme and configuration loading.
    pub const THEME: &str = "horizon_lattice_atomic::theme";
    /// Theme file watching.
    pub const HOT_RELOAD: &str = "horizon_lattice_atomic::hot_reload";
}
