//! IR code codecs
//!
//! Normalizes the three source encodings (raw patterns, Pronto Hex,
//! protocol-parameter strings) into [`crate::signal::CanonicalSignal`].

pub mod pronto;
pub mod protocol;
pub mod resolver;

pub use resolver::resolve;
