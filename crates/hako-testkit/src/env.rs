use std::env;
use std::ffi::OsString;

/// Scoped override of one environment variable.
///
/// Records the prior state and restores it on drop, set or unset alike.
/// Mutating the process environment is unsafe with concurrent readers;
/// this guard is meant for single-threaded test bodies, which is the
/// usual shape of tests that reach for it.
#[derive(Debug)]
pub struct EnvGuard {
    key: String,
    previous: Option<OsString>,
}

impl EnvGuard {
    /// Set `key` to `value` until the guard drops.
    pub fn set(key: &str, value: &str) -> Self {
        let previous = env::var_os(key);
        // SAFETY: callers hold the guard inside a single-threaded test.
        unsafe { env::set_var(key, value) };
        Self {
            key: key.to_string(),
            previous,
        }
    }

    /// Remove `key` until the guard drops.
    pub fn unset(key: &str) -> Self {
        let previous = env::var_os(key);
        // SAFETY: as above.
        unsafe { env::remove_var(key) };
        Self {
            key: key.to_string(),
            previous,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: as above.
        match self.previous.take() {
            Some(value) => unsafe { env::set_var(&self.key, value) },
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}
