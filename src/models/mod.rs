pub mod requests;
pub mod todo;
pub mod user;
