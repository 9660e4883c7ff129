pub mod book;
pub mod health;
pub mod photograph;
pub mod user;
pub mod v1;
