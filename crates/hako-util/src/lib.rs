//! General-purpose helpers: sequence munging, text predicates, glob
//! listing, and a semver floor gate.

pub use self::error::{Result, UtilError};
pub use self::glob::glob_files;
pub use self::seq::{chunks_of, count_if, dedup, str_chunks_of};
pub use self::text::parses_as_float;
pub use self::ver::at_least;

mod error;
mod glob;
mod seq;
mod text;
mod ver;
