//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use std::io::Write;
use tempfile::NamedTempFile;
use todo_insights::{CategoryTable, Todo, TodoServerHandler};

/// Reference day shared by the fixtures
pub fn today() -> NaiveDate {
    ymd(2024, 1, 10)
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Fixture data: three users, a spread of due dates around 2024-01-10
pub const SAMPLE_DATA: &str = r#"
[[users]]
id = 1
name = "Ada"
email = "ada@example.com"

[[users]]
id = 2
name = "Bob"
email = "bob@example.com"

[[users]]
id = 3
name = "Cy"
email = "cy@example.com"

[[todos]]
id = 1
title = "Fix login bug in API"
category = "Coding"
start_date = "2024-01-08"
due_date = "2024-01-14"
user_id = 1

[[todos]]
id = 2
title = "Quarterly report"
description = "Send to the client"
category = "Work"
start_date = "2024-01-01"
due_date = "2024-01-09"
user_id = 2

[[todos]]
id = 3
title = "Gym session"
category = "Health"
completed = true
due_date = "2024-01-05"
user_id = 1

[[todos]]
id = 4
title = "Plan holiday"
description = "Travel with family"
category = "Personal"
start_date = "2024-02-01"
due_date = 2024-02-10
user_id = 2

[[todos]]
id = 5
title = "Revision for exam"
category = "Study"
start_date = "2024-01-02T08:00:00Z"
due_date = "not a date"
user_id = 1

[[todos]]
id = 6
title = "Deploy backend"
category = "Coding"
due_date = "2024-01-12"
user_id = 3
"#;

/// Write `content` to a temporary data file
pub fn write_data_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Create a handler over `content` with the day pinned to `today()`
pub fn get_test_handler_with(content: &str) -> (TodoServerHandler, NamedTempFile) {
    let file = write_data_file(content);
    let handler = TodoServerHandler::new(file.path().to_str().unwrap(), CategoryTable::default())
        .unwrap()
        .with_fixed_today(Some(today()));
    (handler, file)
}

/// Create a handler over the sample data
pub fn get_test_handler() -> (TodoServerHandler, NamedTempFile) {
    get_test_handler_with(SAMPLE_DATA)
}

/// Open todo due on `due`
pub fn todo_due(id: u32, due: Option<NaiveDate>) -> Todo {
    let mut todo = Todo::new(id, format!("Todo {}", id), 1);
    todo.due_date = due;
    todo
}
