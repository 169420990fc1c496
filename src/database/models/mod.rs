mod macros;
mod nullable;
pub mod player;
pub mod report;
pub mod team;

// Re-export all models for easy importing
pub use player::*;
pub use report::*;
pub use team::*;
