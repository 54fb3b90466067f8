use serde::{Deserialize, Serialize};

pub type BookId = u64;

/// Catalog record for a single book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Store-assigned identifier, unique for the lifetime of the catalog
    pub id: BookId,
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Genre, omitted from output when never supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Inventory count, omitted from output when never supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copies_available: Option<u64>,
}

/// Request model for creating a new book.
///
/// The store does not validate field presence: a missing `title` or `author`
/// deserializes to the empty string and is persisted as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    pub genre: Option<String>,
    pub copies_available: Option<u64>,
}

/// Partial update for an existing book. Only fields present in the request
/// are merged into the stored record; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copies_available: Option<u64>,
}
