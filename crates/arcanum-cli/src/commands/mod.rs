pub mod deck;
pub mod draw;
pub mod purge;
pub mod read;
pub mod sessions;
pub mod unlock;
