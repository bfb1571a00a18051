use crate::models::todo::Todo;
use crate::models::user::User;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

/// In-memory store for user records, keyed by user id.
///
/// Single source of truth for identity and quota state. Unbounded: entries
/// live for the process lifetime (todos can be deleted, users cannot).
/// Lookups return cloned snapshots; mutations go through the keyed helpers
/// so each one happens under the entry lock.
pub struct UserStore {
    users: DashMap<Uuid, User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    /// Get a user by id
    /// Returns a clone of the user if found
    pub fn find_by_id(&self, id: Uuid) -> Option<User> {
        self.users.get(&id).map(|entry| entry.value().clone())
    }

    /// Get a user by username
    /// Returns a clone of the user if found
    /// Note: This is a linear search over all users
    pub fn find_by_username(&self, username: &str) -> Option<User> {
        self.users
            .iter()
            .find(|entry| entry.value().username == username)
            .map(|entry| entry.value().clone())
    }

    /// Add a user to the store
    /// The caller must have already verified that the username is unique
    pub fn insert(&self, user: User) {
        self.users.insert(user.id, user);
    }

    /// Flip the pro flag on. Returns the updated user, or `None` if absent.
    pub fn set_pro(&self, id: Uuid) -> Option<User> {
        self.users.get_mut(&id).map(|mut entry| {
            entry.pro = true;
            entry.clone()
        })
    }

    /// Append a todo to a user's collection. Returns the stored todo.
    pub fn push_todo(&self, user_id: Uuid, todo: Todo) -> Option<Todo> {
        self.users.get_mut(&user_id).map(|mut entry| {
            entry.todos.push(todo.clone());
            todo
        })
    }

    /// Overwrite title and deadline on an existing todo, in place
    pub fn update_todo(
        &self,
        user_id: Uuid,
        todo_id: Uuid,
        title: String,
        deadline: DateTime<Utc>,
    ) -> Option<Todo> {
        let mut entry = self.users.get_mut(&user_id)?;
        let todo = entry.todos.iter_mut().find(|todo| todo.id == todo_id)?;

        todo.title = title;
        todo.deadline = deadline;

        Some(todo.clone())
    }

    /// Set the done flag. Idempotent: marking an already-done todo is a no-op.
    pub fn complete_todo(&self, user_id: Uuid, todo_id: Uuid) -> Option<Todo> {
        let mut entry = self.users.get_mut(&user_id)?;
        let todo = entry.todos.iter_mut().find(|todo| todo.id == todo_id)?;

        todo.done = true;

        Some(todo.clone())
    }

    /// Remove a todo from its owner's collection by id.
    /// Returns the removed todo, preserving the order of the remainder.
    pub fn remove_todo(&self, user_id: Uuid, todo_id: Uuid) -> Option<Todo> {
        let mut entry = self.users.get_mut(&user_id)?;
        let position = entry.todos.iter().position(|todo| todo.id == todo_id)?;

        Some(entry.todos.remove(position))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
