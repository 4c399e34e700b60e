//! Support code for tests: assert the absence of a failure the same way
//! as its presence, hand out self-cleaning temp files, capture printed
//! output, and scope environment overrides.

pub use self::capture::Capture;
pub use self::env::EnvGuard;
pub use self::scoped::ScopedFile;
pub use self::signal::{Signal, outcome};

mod capture;
mod env;
mod scoped;
mod signal;
