use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CardStore;

/// Lists all cards, most recently updated first.
///
/// Files that fail to decode are reported as warnings, never as errors.
pub fn run<S: CardStore>(store: &S) -> Result<CmdResult> {
    let outcome = store.scan()?;

    let mut cards = outcome.cards;
    cards.sort_by(|a, b| {
        b.updated_at
            .cmp(&a.updated_at)
            .then_with(|| b.created_at.cmp(&a.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut result = CmdResult::default().with_listed_cards(cards);
    for skipped in outcome.skipped {
        result.add_message(CmdMessage::warning(format!(
            "Skipped {}: {}",
            skipped.path.display(),
            skipped.reason
        )));
    }
    Ok(result)
}
