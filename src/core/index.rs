use crate::domain::model::{Contact, GroupSection};
use std::collections::HashMap;

/// Grouping and filtering over a flat contact list.
///
/// Both operations are pure: inputs are borrowed and never modified, and
/// the result is rebuilt from scratch on every call.
pub struct ContactIndex;

impl ContactIndex {
    /// Partition contacts by `group`.
    ///
    /// Sections come out in first-occurrence order of their label and keep
    /// the input order of their items.
    pub fn group(contacts: &[Contact]) -> Vec<GroupSection> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut sections: Vec<GroupSection> = Vec::new();

        for contact in contacts {
            let slot = *positions.entry(contact.group.as_str()).or_insert_with(|| {
                sections.push(GroupSection::new(contact.group.clone()));
                sections.len() - 1
            });
            sections[slot].items.push(contact.clone());
        }

        sections
    }

    /// Keep only contacts matching `query`, dropping sections that end up empty.
    pub fn search(sections: &[GroupSection], query: &str) -> Vec<GroupSection> {
        let lowered = query.to_lowercase();

        sections
            .iter()
            .filter_map(|section| {
                let items: Vec<Contact> = section
                    .items
                    .iter()
                    .filter(|contact| contact.matches_lowered(&lowered, query))
                    .cloned()
                    .collect();

                if items.is_empty() {
                    None
                } else {
                    Some(GroupSection {
                        title: section.title.clone(),
                        items,
                    })
                }
            })
            .collect()
    }

    /// `search(group(contacts), query)`, the path taken on every query change.
    pub fn query(contacts: &[Contact], query: &str) -> Vec<GroupSection> {
        Self::search(&Self::group(contacts), query)
    }
}
