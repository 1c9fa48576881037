pub mod auth;
pub mod blogs;
pub mod users;
