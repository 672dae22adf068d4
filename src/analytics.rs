//! Category analytics over a todo collection
//!
//! Categories here are inferred from todo text, not read from the stored
//! `category` column.

use crate::categories::CategoryTable;
use crate::todo::{Todo, User};
use std::collections::{BTreeMap, HashSet};

/// Number of todos matching each category
///
/// A todo matching several categories is counted once under each, so the sum
/// of counts can exceed the number of todos. Labels without matches are absent.
pub fn category_counts<'a, I>(todos: I, table: &CategoryTable) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a Todo>,
{
    let mut counts = BTreeMap::new();
    for todo in todos {
        for label in table.categorize(&todo.categorization_text()) {
            *counts.entry(label).or_insert(0) += 1;
        }
    }
    counts
}

/// Users owning at least one todo in `category`
///
/// Returned in the order of `users`. Todos owned by IDs missing from `users`
/// are ignored.
pub fn category_users<'a, 'u, I>(
    todos: I,
    users: &'u [User],
    table: &CategoryTable,
    category: &str,
) -> Vec<&'u User>
where
    I: IntoIterator<Item = &'a Todo>,
{
    let owners: HashSet<u32> = todos
        .into_iter()
        .filter(|todo| table.categorize(&todo.categorization_text()).contains(category))
        .map(|todo| todo.user_id)
        .collect();

    users.iter().filter(|user| owners.contains(&user.id)).collect()
}
