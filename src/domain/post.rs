use serde::{Deserialize, Serialize};

/// A blog post as served by the jsonplaceholder `/posts` resource.
/// The shape is owned by the remote service; extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

impl std::fmt::Display for Post {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Post(id={}, user_id={}, title={})",
            self.id, self.user_id, self.title
        )
    }
}
