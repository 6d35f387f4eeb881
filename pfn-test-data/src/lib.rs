//! test data shared between the pfn crates.

pub mod builder;
pub mod fonts;
pub mod lebuffer;

pub use builder::{BlockBuilder, FontBuilder};
pub use lebuffer::{LeBuffer, ToLeBytes};
