//! Backends an order log can live in.

pub mod json_file;
#[cfg(test)]
pub mod memory;

pub use json_file::*;
#[cfg(test)]
pub use memory::*;
