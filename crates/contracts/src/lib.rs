//! Shared, platform-neutral contracts for the Sketch2Site client.
//!
//! Everything here compiles both natively and to wasm: the session state machine,
//! sketch image encoding, prompt templates and the Gemini client boundary.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod usecases;
