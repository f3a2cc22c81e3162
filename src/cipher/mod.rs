//! Central cipher module that exposes key-square construction, digraph
//! segmentation, and the pair-substitution engine. Each submodule focuses on
//! a single responsibility so the algorithm stays simple and auditable.

pub mod alphabet;
pub mod engine;
pub mod key_square;
pub mod segment;

pub use engine::decrypt;
pub use key_square::{CipherError, KeySquare, Position};
pub use segment::Digraph;
