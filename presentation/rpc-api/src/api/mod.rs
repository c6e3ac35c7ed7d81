pub mod email;
pub mod error;
pub mod health;
pub mod recommendation;
pub mod tags;
