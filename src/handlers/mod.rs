pub mod players;
pub mod reports;
pub mod shared;
pub mod teams;
