use serde::{Deserialize, Serialize};

/// Format of `created_at`: local time with microseconds, no offset
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub due_date: Option<String>,
    pub student_email: String,
    pub completed: bool,
    pub created_at: String,
}

/// Fields supplied when creating a todo
#[derive(Debug, Clone, Deserialize)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    pub student_email: String,
}

#[cfg(test)]
impl NewTodo {
    pub fn new(title: impl Into<String>, student_email: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
            student_email: student_email.into(),
        }
    }
}

/// Partial update. Absent (or null) fields leave the stored value alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub completed: Option<bool>,
}

impl Todo {
    pub fn apply(&mut self, patch: TodoPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = Some(due_date);
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Todo {
        Todo {
            id: 7,
            title: "Read chapter 3".into(),
            description: "History".into(),
            due_date: Some("2025-03-01".into()),
            student_email: "emma@mergington.edu".into(),
            completed: false,
            created_at: "2025-02-01T10:00:00.000000".into(),
        }
    }

    #[test]
    fn completed_only_patch_leaves_other_fields() {
        let mut todo = sample();
        todo.apply(TodoPatch {
            completed: Some(true),
            ..Default::default()
        });

        let expected = Todo {
            completed: true,
            ..sample()
        };
        assert_eq!(todo, expected);
    }

    #[test]
    fn null_fields_in_patch_body_are_ignored() {
        let patch: TodoPatch =
            serde_json::from_str(r#"{"title": null, "due_date": "2025-04-01"}"#).unwrap();
        let mut todo = sample();
        todo.apply(patch);

        assert_eq!(todo.title, "Read chapter 3");
        assert_eq!(todo.due_date.as_deref(), Some("2025-04-01"));
    }

    #[test]
    fn new_todo_requires_title_and_email() {
        assert!(serde_json::from_str::<NewTodo>(r#"{"title": "x"}"#).is_err());
        assert!(serde_json::from_str::<NewTodo>(r#"{"student_email": "s@x.edu"}"#).is_err());

        let todo: NewTodo =
            serde_json::from_str(r#"{"title": "x", "student_email": "s@x.edu"}"#).unwrap();
        assert_eq!(todo.description, None);
        assert_eq!(todo.due_date, None);
    }
}
