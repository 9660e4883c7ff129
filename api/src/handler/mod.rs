pub mod book;
pub mod health;
pub mod lending;
pub mod photograph;
pub mod user;
