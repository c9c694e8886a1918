use crate::error::{Error, Result};
use crate::models::{NoteInfo, NotePatch};

/// Maximum field lengths, counted in chars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreLimits {
    pub max_title_len: usize,
    pub max_context_len: usize,
    pub max_author_len: usize,
}

impl Default for StoreLimits {
    fn default() -> Self {
        Self {
            max_title_len: 256,
            max_context_len: 65_536,
            max_author_len: 256,
        }
    }
}

impl StoreLimits {
    /// Check every field of a full note payload
    pub fn check_info(&self, info: &NoteInfo) -> Result<()> {
        check_len("title", &info.title, self.max_title_len)?;
        check_len("context", &info.context, self.max_context_len)?;
        check_len("author", &info.author, self.max_author_len)
    }

    /// Check only the fields a patch sets
    pub fn check_patch(&self, patch: &NotePatch) -> Result<()> {
        if let Some(title) = &patch.title {
            check_len("title", title, self.max_title_len)?;
        }
        if let Some(context) = &patch.context {
            check_len("context", context, self.max_context_len)?;
        }
        if let Some(author) = &patch.author {
            check_len("author", author, self.max_author_len)?;
        }
        Ok(())
    }
}

fn check_len(field: &str, value: &str, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max {
        return Err(Error::invalid_argument(format!(
            "{field} is {len} characters long, the maximum is {max}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tight() -> StoreLimits {
        StoreLimits {
            max_title_len: 3,
            max_context_len: 5,
            max_author_len: 2,
        }
    }

    #[test]
    fn limits_count_chars_not_bytes() {
        let info = NoteInfo::new("äöü", "", "", false);
        assert!(tight().check_info(&info).is_ok());
    }

    #[test]
    fn limits_name_the_offending_field() {
        let info = NoteInfo::new("abc", "", "xyz", false);
        let err = tight().check_info(&info).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(ref message) if message.contains("author")));
    }

    #[test]
    fn patch_check_ignores_absent_fields() {
        let patch = NotePatch::new().is_public(true);
        assert!(tight().check_patch(&patch).is_ok());

        let patch = NotePatch::new().context("too long");
        assert!(tight().check_patch(&patch).is_err());
    }
}
