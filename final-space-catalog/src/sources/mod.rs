//! Catalog source implementations.

mod finalspace;

pub use finalspace::FinalSpaceSource;
