pub mod player;
pub mod team;

// Repositories are plain functions over an executor; callers pass the pool
// for reads and a transaction for writes.
pub use player as player_repo;
pub use team as team_repo;
