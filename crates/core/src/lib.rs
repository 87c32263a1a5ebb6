//! Board resolution and tumble cascade engine. Keep this crate free of IO and platform concerns.

pub mod board;
pub mod config;
pub mod evaluator;
pub mod grid;
pub mod paylines;
pub mod poker;
pub mod resolution;
pub mod rng;
pub mod symbols;

pub use board::*;
pub use config::*;
pub use evaluator::*;
pub use grid::*;
pub use paylines::*;
pub use poker::*;
pub use resolution::*;
pub use rng::*;
pub use symbols::*;
