use chrono::Local;
use tracing::{info, warn};

use crate::error::StoreError;
use crate::model::todo::{CREATED_AT_FORMAT, NewTodo, Todo, TodoPatch};

/// Todos in creation order, with the counter that hands out their ids.
///
/// Ids start at 1 and are never handed out twice, even after a delete.
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self, email: Option<&str>) -> Vec<Todo> {
        match email {
            Some(email) => self
                .todos
                .iter()
                .filter(|t| t.student_email == email)
                .cloned()
                .collect(),
            None => self.todos.clone(),
        }
    }

    pub fn create(&mut self, new_todo: NewTodo) -> Todo {
        let todo = Todo {
            id: self.next_id,
            title: new_todo.title,
            description: new_todo.description.unwrap_or_default(),
            due_date: new_todo.due_date,
            student_email: new_todo.student_email,
            completed: false,
            created_at: Local::now().format(CREATED_AT_FORMAT).to_string(),
        };
        self.next_id += 1;

        info!("Created todo {} for {}", todo.id, todo.student_email);
        self.todos.push(todo.clone());
        todo
    }

    pub fn update(&mut self, id: u64, patch: TodoPatch) -> Result<Todo, StoreError> {
        let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) else {
            warn!("Cannot update missing todo {id}");
            return Err(StoreError::TodoNotFound);
        };

        todo.apply(patch);
        info!("Updated todo {id}");
        Ok(todo.clone())
    }

    pub fn delete(&mut self, id: u64) -> Result<String, StoreError> {
        let Some(position) = self.todos.iter().position(|t| t.id == id) else {
            warn!("Cannot delete missing todo {id}");
            return Err(StoreError::TodoNotFound);
        };

        self.todos.remove(position);
        info!("Deleted todo {id}");
        Ok("Todo deleted successfully".into())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;

    #[test]
    fn create_update_delete_scenario() {
        let mut store = TodoStore::new();

        let created = store.create(NewTodo::new("A", "s@e.edu"));
        assert_eq!(created.id, 1);
        assert!(!created.completed);
        assert_eq!(created.description, "");
        assert_eq!(created.due_date, None);

        let updated = store
            .update(
                1,
                TodoPatch {
                    title: Some("B".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.title, "B");
        assert!(!updated.completed);
        assert_eq!(updated.created_at, created.created_at);

        assert_eq!(store.delete(1).unwrap(), "Todo deleted successfully");
        assert_eq!(
            store.update(1, TodoPatch::default()),
            Err(StoreError::TodoNotFound)
        );
        assert_eq!(store.delete(1), Err(StoreError::TodoNotFound));
    }

    #[test]
    fn ids_are_never_reused() {
        let mut store = TodoStore::new();
        let first = store.create(NewTodo::new("A", "s@e.edu"));
        store.delete(first.id).unwrap();

        let second = store.create(NewTodo::new("A", "s@e.edu"));
        assert_eq!(second.id, 2);

        let third = store.create(NewTodo::new("C", "t@e.edu"));
        assert!(third.id > second.id);
    }

    #[test]
    fn list_filters_by_email_in_creation_order() {
        let mut store = TodoStore::new();
        store.create(NewTodo::new("one", "a@e.edu"));
        store.create(NewTodo::new("two", "b@e.edu"));
        store.create(NewTodo::new("three", "a@e.edu"));

        let titles: Vec<_> = store
            .list(Some("a@e.edu"))
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, ["one", "three"]);

        assert_eq!(store.list(None).len(), 3);
        assert!(store.list(Some("nobody@e.edu")).is_empty());
    }

    #[test]
    fn completed_can_toggle_back() {
        let mut store = TodoStore::new();
        let todo = store.create(NewTodo::new("A", "s@e.edu"));

        let done = TodoPatch {
            completed: Some(true),
            ..Default::default()
        };
        assert!(store.update(todo.id, done).unwrap().completed);

        let undone = TodoPatch {
            completed: Some(false),
            ..Default::default()
        };
        assert!(!store.update(todo.id, undone).unwrap().completed);
    }

    #[test]
    fn created_at_is_iso_local_time() {
        let mut store = TodoStore::new();
        let todo = store.create(NewTodo::new("A", "s@e.edu"));
        assert!(NaiveDateTime::parse_from_str(&todo.created_at, CREATED_AT_FORMAT).is_ok());
    }

    #[test]
    fn delete_only_removes_the_matching_todo() {
        let mut store = TodoStore::new();
        store.create(NewTodo::new("keep", "s@e.edu"));
        let doomed = store.create(NewTodo::new("drop", "s@e.edu"));
        store.create(NewTodo::new("keep too", "s@e.edu"));

        store.delete(doomed.id).unwrap();
        let ids: Vec<_> = store.list(None).iter().map(|t| t.id).collect();
        assert_eq!(ids, [1, 3]);
    }
}
