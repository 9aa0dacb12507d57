use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Field set for a tutorial that has not been stored yet.
///
/// Has no identifier. The store turns it into a [`Tutorial`] on create.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewTutorial {
    pub title: String,
    pub tutorial_url: String,
    pub description: String,
    pub published: bool,
}

impl NewTutorial {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        tutorial_url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            tutorial_url: tutorial_url.into(),
            description: description.into(),
            published: false,
        }
    }

    #[must_use]
    pub const fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }
}

/// A stored tutorial.
///
/// Field changes on a value of this type are local until the value is saved
/// back through the store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Tutorial {
    pub id: i64,
    pub title: String,
    pub tutorial_url: String,
    pub description: String,
    pub published: bool,
}

impl Tutorial {
    /// Attach a store-assigned id to a field set.
    #[must_use]
    pub fn from_new(id: i64, new: NewTutorial) -> Self {
        Self {
            id,
            title: new.title,
            tutorial_url: new.tutorial_url,
            description: new.description,
            published: new.published,
        }
    }
}
