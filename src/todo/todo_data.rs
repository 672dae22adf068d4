use crate::todo::todo_item::{Todo, User};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// In-memory copy of the todo data file
///
/// Vec is used as storage so listing follows file order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoData {
    /// All known users
    #[serde(default)]
    pub users: Vec<User>,

    /// All todos across users
    #[serde(default)]
    pub todos: Vec<Todo>,
}

impl TodoData {
    /// Create a new empty TodoData instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a todo by its ID
    ///
    /// # Arguments
    /// * `id` - The todo ID to search for
    ///
    /// # Returns
    /// The first todo with that ID, if any
    pub fn find_todo(&self, id: u32) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Find a user by its ID
    pub fn find_user(&self, id: u32) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// All todos owned by the given user, in stored order
    pub fn todos_for_user(&self, user_id: u32) -> Vec<&Todo> {
        self.todos.iter().filter(|t| t.user_id == user_id).collect()
    }

    /// Describe data problems that do not prevent loading
    ///
    /// Reports duplicate todo IDs, duplicate user IDs and todos that point at
    /// a user missing from `users`. An empty `users` list disables the last check
    /// so todo-only files stay quiet.
    pub fn integrity_problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        let mut todo_ids: HashMap<u32, usize> = HashMap::new();
        for todo in &self.todos {
            *todo_ids.entry(todo.id).or_default() += 1;
        }
        let mut duplicate_todos: Vec<u32> = todo_ids
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(id, _)| id)
            .collect();
        duplicate_todos.sort_unstable();
        for id in duplicate_todos {
            problems.push(format!("Duplicate todo ID {}", id));
        }

        let mut seen_users = HashSet::new();
        for user in &self.users {
            if !seen_users.insert(user.id) {
                problems.push(format!("Duplicate user ID {}", user.id));
            }
        }

        if !self.users.is_empty() {
            for todo in &self.todos {
                if !seen_users.contains(&todo.user_id) {
                    problems.push(format!(
                        "Todo {} belongs to unknown user {}",
                        todo.id, todo.user_id
                    ));
                }
            }
        }

        problems
    }
}
