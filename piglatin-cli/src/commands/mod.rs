//! CLI command implementations

pub mod translate;

pub use translate::{OutputFormat, TranslateArgs};
