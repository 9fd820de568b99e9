use crate::commands::{CmdMessage, CmdResult};
use crate::filter::Category;
use crate::listing::{ListingSession, ListingStatus};

/// Snapshot of a listing session: status, the visible records and the total.
pub fn run(session: &ListingSession) -> CmdResult {
    let status = session.status();
    let listed = session.visible().into_iter().cloned().collect();
    let total = session.counts().map(|(_, total)| total).unwrap_or(0);

    let mut result = CmdResult::default().with_listing(status, listed, total);
    match status {
        ListingStatus::Failed => {
            if let Some(err) = session.error() {
                result.add_message(CmdMessage::error(err.to_string()));
            }
        }
        ListingStatus::NoResults if !session.criteria().is_unset() => {
            result.add_message(CmdMessage::info(
                "Try adjusting your search or filter criteria.",
            ));
        }
        _ => {}
    }

    // A value absent from the vocabulary can never match; say so instead of
    // leaving the user with a bare empty result.
    if let Some(vocabulary) = session.vocabulary() {
        for category in Category::ALL {
            if let Some(value) = session.criteria().get(category) {
                if !vocabulary.contains(category, value) {
                    result.add_message(CmdMessage::warning(format!(
                        "No record has {} \"{}\". Run `valor filters` to see the values in use.",
                        category, value
                    )));
                }
            }
        }
    }
    result
}
