use cardfile::api::{CmdMessage, MessageLevel};
use cardfile::error::Result;
use cardfile::model::Card;
use cardfile::naming::derive_title;
use chrono::{TimeZone, Utc};
use colored::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;
const ID_WIDTH: usize = 8;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}

pub fn print_cards(cards: &[Card]) {
    if cards.is_empty() {
        println!("No cards found.");
        return;
    }

    for card in cards {
        let short_id: String = card.id.chars().take(ID_WIDTH).collect();
        let time_ago = format_time_ago(card.updated_at);

        let title = derive_title(&card.content);
        let title_content = match preview(&card.content, &title) {
            Some(p) => format!("{} {}", title, p),
            None => title.clone(),
        };

        let fixed_width = ID_WIDTH + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(display.width());

        println!(
            "{}  {}{}{}",
            short_id.yellow(),
            display,
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

pub fn print_cards_json(cards: &[Card]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(cards)?);
    Ok(())
}

pub fn print_full_card(card: &Card) {
    print!("{}", card.content);
    if !card.content.ends_with('\n') {
        println!();
    }
}

/// Body text after the title line, flattened to one line.
fn preview(content: &str, title: &str) -> Option<String> {
    let rest: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .skip_while(|l| l.trim_start_matches('#').trim() == title)
        .collect();
    if rest.is_empty() {
        None
    } else {
        Some(rest.join(" "))
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: i64) -> String {
    let then = Utc
        .timestamp_opt(timestamp, 0)
        .single()
        .unwrap_or_else(Utc::now);
    let duration = Utc::now().signed_duration_since(then);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
