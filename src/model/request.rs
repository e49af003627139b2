use serde::Deserialize;

/// `?email=` on the signup and unregister routes
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Optional `?email=` filter on the todo listing
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TodoFilter {
    pub email: Option<String>,
}

impl TodoFilter {
    /// An empty filter behaves as no filter at all
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.is_empty())
    }
}
