//! Injected environment lookup.
//!
//! Terminal width and CI detection both come from environment variables.
//! Formatters read them through this trait instead of `std::env` directly so
//! tests can substitute values without mutating process-global state.

/// Read access to environment variables.
pub trait Environment {
    /// Returns the value of `key`, or `None` when unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl Environment for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
