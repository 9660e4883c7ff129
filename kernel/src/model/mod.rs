pub mod book;
pub mod geolocation;
pub mod id;
pub mod photograph;
pub mod request;
pub mod user;
