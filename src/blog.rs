use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Blog {
    pub title: String,
    pub description: String,
}

impl Blog {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// The single blog served by the index.
    pub fn featured() -> Self {
        Self::new("Bits 'n Bytes", "Random musings of a programmer.")
    }

    /// A stand-in record for `title`; nothing is looked up.
    pub fn placeholder(title: impl Into<String>) -> Self {
        Self::new(title, "No description")
    }
}
