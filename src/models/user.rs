use crate::models::todo::Todo;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Assigned at creation, immutable
    pub id: Uuid,
    /// Display name, never mutated after creation
    pub name: String,
    /// Unique handle across all users; uniqueness is checked at creation only
    pub username: String,
    /// One-way flag: false -> true via the upgrade endpoint, no downgrade
    pub pro: bool,
    /// Owned todos in insertion order
    pub todos: Vec<Todo>,
}

impl User {
    pub fn new(id: Uuid, name: String, username: String) -> Self {
        Self {
            id,
            name,
            username,
            pro: false,
            todos: Vec::new(),
        }
    }

    /// Find a todo in this user's collection by id
    pub fn find_todo(&self, todo_id: Uuid) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == todo_id)
    }
}
