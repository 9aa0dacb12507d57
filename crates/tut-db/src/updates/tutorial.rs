//! Tutorial update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct TutorialUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tutorial_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

impl TutorialUpdate {
    /// True when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.tutorial_url.is_none()
            && self.description.is_none()
            && self.published.is_none()
    }
}

#[derive(Debug, Default)]
pub struct TutorialUpdateBuilder(TutorialUpdate);

impl TutorialUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(TutorialUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn tutorial_url(mut self, tutorial_url: impl Into<String>) -> Self {
        self.0.tutorial_url = Some(tutorial_url.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn published(mut self, published: bool) -> Self {
        self.0.published = Some(published);
        self
    }

    #[must_use]
    pub fn build(self) -> TutorialUpdate {
        self.0
    }
}
