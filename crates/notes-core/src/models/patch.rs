//! Partial note updates
//!
//! Every field is either absent (`None`, leave the stored value alone) or
//! present (`Some`, overwrite it). `Some(String::new())` and `Some(false)` are
//! real values and are written through like any other.

use super::NoteInfo;

/// A partial update to a note's content
///
/// Transports build this from their own "field was sent" signal; the store
/// never inspects wire formats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub context: Option<String>,
    pub author: Option<String>,
    pub is_public: Option<bool>,
}

impl NotePatch {
    /// An empty patch: applying it changes no field
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub const fn is_public(mut self, is_public: bool) -> Self {
        self.is_public = Some(is_public);
        self
    }

    /// True when no field is present
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.context.is_none()
            && self.author.is_none()
            && self.is_public.is_none()
    }

    /// Overwrite the present fields of `info`, leaving the absent ones untouched
    pub fn apply_to(self, info: &mut NoteInfo) {
        if let Some(title) = self.title {
            info.title = title;
        }
        if let Some(context) = self.context {
            info.context = context;
        }
        if let Some(author) = self.author {
            info.author = author;
        }
        if let Some(is_public) = self.is_public {
            info.is_public = is_public;
        }
    }
}
