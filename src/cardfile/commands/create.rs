use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::naming::derive_title;
use crate::store::CardStore;

pub fn run<S: CardStore>(store: &S, content: String) -> Result<CmdResult> {
    let card = store.create(content)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Card created ({}): {}",
        card.id,
        derive_title(&card.content)
    )));
    result.affected_cards.push(card);
    Ok(result)
}
