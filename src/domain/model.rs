use serde::{Deserialize, Serialize};

/// A single name/number/group record.
///
/// `number` is kept exactly as entered; no normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub number: String,
    pub group: String,
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        number: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            group: group.into(),
        }
    }

    /// Case-insensitive on the name, case-sensitive on the number.
    pub fn matches(&self, query: &str) -> bool {
        self.matches_lowered(&query.to_lowercase(), query)
    }

    pub(crate) fn matches_lowered(&self, lowered_query: &str, raw_query: &str) -> bool {
        self.name.to_lowercase().contains(lowered_query) || self.number.contains(raw_query)
    }
}

/// A titled, ordered group of contacts ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSection {
    pub title: String,
    pub items: Vec<Contact>,
}

impl GroupSection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// What the detail view should show. `Hidden` is the no-selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailView<'a> {
    Hidden,
    Visible(&'a Contact),
}

impl<'a> DetailView<'a> {
    pub fn contact(&self) -> Option<&'a Contact> {
        match *self {
            DetailView::Hidden => None,
            DetailView::Visible(contact) => Some(contact),
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, DetailView::Visible(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_match_ignores_case() {
        let contact = Contact::new("Ahmed", "03001234567", "Family");
        assert!(contact.matches("ahmed"));
        assert!(contact.matches("HME"));
        assert!(!contact.matches("bilal"));
    }

    #[test]
    fn test_number_match_is_raw_substring() {
        let contact = Contact::new("Ahmed", "0300 123", "Family");
        assert!(contact.matches("0 1"));
        assert!(!contact.matches("0300123"));
    }

    #[test]
    fn test_number_match_keeps_case() {
        let contact = Contact::new("Zed", "EXT12", "Work");
        assert!(contact.matches("EXT"));
        assert!(!contact.matches("ext"));
        assert!(!contact.matches("xt1"));
    }

    #[test]
    fn test_empty_query_matches() {
        assert!(Contact::new("Ahmed", "03001234567", "Family").matches(""));
    }

    #[test]
    fn test_detail_view_hidden_has_no_contact() {
        assert!(DetailView::Hidden.contact().is_none());
        assert!(!DetailView::Hidden.is_visible());
    }
}
