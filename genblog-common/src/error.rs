//! Error type shared by the content store and its loaders.

use std::fmt;

/// Which collection of the content store an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// An [`crate::Author`]
    Author,
    /// An [`crate::Article`]
    Article,
}

impl EntityKind {
    /// Returns a lowercase label for the entity kind.
    pub fn as_label(&self) -> &'static str {
        match self {
            EntityKind::Author => "author",
            EntityKind::Article => "article",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Errors produced while loading or querying the content store.
#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    /// No entity with this id exists, or the route parameter was malformed.
    #[error("{kind} {id} not found")]
    NotFound {
        /// Collection that was searched
        kind: EntityKind,
        /// The id as it appeared in the request
        id: String,
    },

    /// Two entities in the same collection share an id.
    #[error("duplicate {kind} id {id}")]
    DuplicateId {
        /// Collection holding the duplicate
        kind: EntityKind,
        /// The repeated id
        id: u32,
    },

    /// An article points at an author that does not exist.
    #[error("article {article} references unknown author {author}")]
    DanglingAuthor {
        /// Offending article id
        article: u32,
        /// Missing author id
        author: u32,
    },

    /// The dataset JSON could not be parsed.
    #[error("invalid content dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// The dataset file could not be read.
    #[error("reading content dataset: {0}")]
    Io(#[from] std::io::Error),
}

impl BlogError {
    /// Shorthand for a [`BlogError::NotFound`].
    pub fn not_found(kind: EntityKind, id: impl ToString) -> Self {
        BlogError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Whether this error should be rendered as the NotFound page.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BlogError::NotFound { .. })
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, BlogError>;
