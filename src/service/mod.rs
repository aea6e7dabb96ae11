//! Service layer module.
//!
//! Contains the change engine: amount normalization, the minimum-piece
//! solver, response assembly, and the orchestrating `ChangeService`.

pub mod assemble;
pub mod change;
pub mod normalize;
pub mod solver;

pub use change::ChangeService;
