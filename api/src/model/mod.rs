pub mod book;
pub mod photograph;
pub mod request;
pub mod user;
