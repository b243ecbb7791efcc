//! Address classification and field extraction.
//!
//! This module contains the parsing pipeline:
//! - Classifying a raw address into a syntax family
//! - One extractor per family (URI, SCP-like, tilde-user)
//! - The `parse` entry point dispatching between them

pub mod classifier;
pub mod parser;
mod scp;
mod tilde;
mod uri;

// Re-export main functionality
pub use classifier::classify;
pub use parser::parse;
