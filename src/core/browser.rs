use crate::core::index::ContactIndex;
use crate::domain::model::{Contact, DetailView, GroupSection};

/// Holds the live query and the selected contact over an immutable list.
///
/// Every query change recomputes the visible sections from the full list.
/// The selection is independent of the query: narrowing the list does not
/// dismiss an open detail view.
#[derive(Debug, Clone)]
pub struct ContactBrowser {
    contacts: Vec<Contact>,
    query: String,
    sections: Vec<GroupSection>,
    selected: Option<Contact>,
}

impl ContactBrowser {
    pub fn new(contacts: Vec<Contact>) -> Self {
        let sections = ContactIndex::group(&contacts);
        Self {
            contacts,
            query: String::new(),
            sections,
            selected: None,
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.sections = ContactIndex::query(&self.contacts, &self.query);
        tracing::debug!(
            "Query {:?} matched {} contacts in {} sections",
            self.query,
            self.visible_count(),
            self.sections.len()
        );
    }

    pub fn sections(&self) -> &[GroupSection] {
        &self.sections
    }

    pub fn visible_count(&self) -> usize {
        self.sections.iter().map(GroupSection::len).sum()
    }

    /// Contacts in the order they are rendered, across all sections.
    pub fn visible(&self) -> impl Iterator<Item = &Contact> {
        self.sections.iter().flat_map(|section| section.items.iter())
    }

    pub fn select(&mut self, contact: Contact) {
        tracing::debug!("Selected contact {}", contact.name);
        self.selected = Some(contact);
    }

    /// Select the contact at a 1-based position in the rendered list.
    ///
    /// Out-of-range positions leave the current selection as it was.
    pub fn select_at(&mut self, position: usize) -> Option<&Contact> {
        let contact = position
            .checked_sub(1)
            .and_then(|index| self.visible().nth(index))
            .cloned()?;
        self.select(contact);
        self.selected.as_ref()
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Contact> {
        self.selected.as_ref()
    }

    pub fn detail(&self) -> DetailView<'_> {
        match &self.selected {
            Some(contact) => DetailView::Visible(contact),
            None => DetailView::Hidden,
        }
    }
}
