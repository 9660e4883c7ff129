pub mod book;
pub mod health;
pub mod photograph;
pub mod request;
pub mod user;
