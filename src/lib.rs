//! Playfair cipher decryption engine. This crate is deliberately small and
//! transparent so every step of the classical algorithm stays readable
//! in-repo: key-square construction, digraph segmentation, and the positional
//! substitution rule each live in their own module.

pub mod cipher;
pub mod config;

pub use crate::cipher::engine::decrypt;
pub use crate::cipher::CipherError;
