//! Blank suppression for partial updates.
//!
//! A field submitted as `""` is treated as "not submitted", so a client can't
//! clobber a stored value with an empty string. Only the exact empty string
//! counts as blank; whitespace-only values are left for validation to reject.

use crate::repos::list_repo::ListChanges;

pub trait RemoveBlanks {
    /// Drop every field whose value is the empty string.
    fn remove_blanks(self) -> Self;
}

pub fn drop_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl RemoveBlanks for ListChanges {
    fn remove_blanks(self) -> Self {
        Self {
            title: drop_blank(self.title),
            text: drop_blank(self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_are_removed() {
        let changes = ListChanges {
            title: Some("New title".into()),
            text: Some(String::new()),
        }
        .remove_blanks();

        assert_eq!(changes.title.as_deref(), Some("New title"));
        assert_eq!(changes.text, None);
    }

    #[test]
    fn all_blank_input_becomes_an_empty_update() {
        let changes = ListChanges {
            title: Some(String::new()),
            text: Some(String::new()),
        }
        .remove_blanks();

        assert!(changes.is_empty());
    }

    #[test]
    fn whitespace_is_not_blank() {
        assert_eq!(drop_blank(Some("  ".into())).as_deref(), Some("  "));
        assert_eq!(drop_blank(None), None);
    }
}
