//! Query matching: tokenization, record flattening, and the collection scan.

pub mod flatten;
pub mod matcher;
pub mod pattern;

pub use flatten::flatten;
pub use matcher::Matcher;
pub use pattern::tokenize;
