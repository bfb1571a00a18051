pub mod extract;
pub mod fallback;
pub mod health;
pub mod todos;
pub mod users;
