use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CardStore;

pub fn run<S: CardStore>(store: &S, id: &str) -> Result<CmdResult> {
    let card = store.read(id)?;
    Ok(CmdResult::default().with_listed_cards(vec![card]))
}

/// Resolves the file currently holding a card.
pub fn path<S: CardStore>(store: &S, id: &str) -> Result<CmdResult> {
    let path = store.card_path(id)?;
    Ok(CmdResult::default().with_card_paths(vec![path]))
}
