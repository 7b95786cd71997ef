//! Recipient counting for the composer.

use outreach_types::models::{CampaignDraft, Contact};
use std::collections::HashMap;

/// Recipient ids plus the two counts the planner consumes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipientPool {
    /// Unique recipient ids, in first-seen order
    pub ids: Vec<String>,
    /// All unique recipients
    pub total: i64,
    /// Recipients with no prior conversation
    pub risky: i64,
}

impl RecipientPool {
    /// Build from the composer's contact list.
    ///
    /// Duplicate ids collapse into one recipient, which only counts as warmed
    /// when every occurrence reports an existing dialog.
    pub fn from_contacts(contacts: &[Contact]) -> Self {
        let mut ids: Vec<String> = Vec::with_capacity(contacts.len());
        let mut warmed: HashMap<&str, bool> = HashMap::with_capacity(contacts.len());

        for contact in contacts {
            if contact.id.is_empty() {
                continue;
            }
            match warmed.get_mut(contact.id.as_str()) {
                Some(has_dialog) => *has_dialog &= contact.has_dialog,
                None => {
                    ids.push(contact.id.clone());
                    warmed.insert(contact.id.as_str(), contact.has_dialog);
                },
            }
        }

        let risky = warmed.values().filter(|has_dialog| !**has_dialog).count();
        Self {
            total: i64::try_from(ids.len()).unwrap_or(i64::MAX),
            risky: i64::try_from(risky).unwrap_or(i64::MAX),
            ids,
        }
    }

    /// Write ids and counts into a draft.
    pub fn apply_to(self, draft: &mut CampaignDraft) {
        draft.total_recipients = self.total;
        draft.risky_recipients = self.risky;
        draft.recipients = self.ids;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: &str, has_dialog: bool) -> Contact {
        Contact { id: id.to_string(), has_dialog }
    }

    #[test]
    fn test_counts_risky_contacts() {
        let pool = RecipientPool::from_contacts(&[
            contact("1", false),
            contact("2", true),
            contact("3", false),
        ]);
        assert_eq!(pool.total, 3);
        assert_eq!(pool.risky, 2);
        assert_eq!(pool.ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_duplicates_collapse_conservatively() {
        let pool = RecipientPool::from_contacts(&[
            contact("1", true),
            contact("1", false),
            contact("2", true),
            contact("2", true),
            contact("", false),
        ]);
        assert_eq!(pool.total, 2);
        assert_eq!(pool.risky, 1);
    }

    #[test]
    fn test_apply_to_draft() {
        let mut draft = CampaignDraft::default();
        RecipientPool::from_contacts(&[contact("x", false)]).apply_to(&mut draft);

        assert_eq!(draft.total_recipients, 1);
        assert_eq!(draft.risky_recipients, 1);
        assert_eq!(draft.recipients, vec!["x"]);
    }
}
