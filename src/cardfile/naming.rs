//! Titles and file names.
//!
//! A card's file name is derived from its title, which in turn is derived from
//! its body. Names are for people browsing the directory; nothing reads
//! identity back out of them.

pub const UNTITLED: &str = "Untitled";

/// Longest base name we produce, in characters.
pub const MAX_NAME_CHARS: usize = 100;

/// Picks a human title out of a card body.
///
/// The first markdown heading wins (leading `#`s stripped). Otherwise the first
/// non-blank line. Otherwise [`UNTITLED`].
pub fn derive_title(body: &str) -> String {
    for line in body.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            return trimmed.trim_start_matches('#').trim().to_string();
        }
    }

    body.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or(UNTITLED)
        .to_string()
}

/// Maps characters that are illegal or awkward in file names.
/// `None` drops the character.
fn substitute(c: char) -> Option<char> {
    match c {
        '/' | '\\' => Some('-'),
        ':' => Some('-'),
        '*' => Some('+'),
        '"' => Some('\''),
        '<' => Some('('),
        '>' => Some(')'),
        '|' => Some('-'),
        '?' => None,
        c if c.is_control() => None,
        c => Some(c),
    }
}

/// Turns a title into a base name that is safe on every common filesystem.
pub fn sanitize(title: &str) -> String {
    let mapped: String = title.chars().filter_map(substitute).collect();
    let trimmed = mapped.trim().trim_end_matches('.');

    let truncated: String = trimmed.chars().take(MAX_NAME_CHARS).collect();
    // Cutting can expose whitespace or a dot at the new end.
    let name = truncated.trim_end().trim_end_matches('.').trim_end();

    if name.is_empty() {
        UNTITLED.to_string()
    } else {
        name.to_string()
    }
}

/// Title → sanitized base name, in one step.
pub fn base_name_for(body: &str) -> String {
    sanitize(&derive_title(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_wins() {
        assert_eq!(derive_title("# Hello\nworld"), "Hello");
    }

    #[test]
    fn heading_found_below_plain_lines() {
        assert_eq!(derive_title("intro\n\n## Real Title  \nmore"), "Real Title");
    }

    #[test]
    fn indented_heading_counts() {
        assert_eq!(derive_title("   ### Deep"), "Deep");
    }

    #[test]
    fn first_non_empty_line_fallback() {
        assert_eq!(derive_title("no heading\nsecond line"), "no heading");
        assert_eq!(derive_title("\n\n   padded  \nnext"), "padded");
    }

    #[test]
    fn empty_body_is_untitled() {
        assert_eq!(derive_title(""), UNTITLED);
        assert_eq!(derive_title("  \n\t\n"), UNTITLED);
    }

    #[test]
    fn bare_hashes_give_empty_title() {
        assert_eq!(derive_title("###\nbody"), "");
        assert_eq!(base_name_for("###\nbody"), UNTITLED);
    }

    #[test]
    fn sanitize_strips_reserved_characters() {
        let name = sanitize("a/b:c*d?e");
        for c in ['/', ':', '*', '?'] {
            assert!(!name.contains(c), "{name:?} contains {c:?}");
        }
        assert!(name.chars().count() <= MAX_NAME_CHARS);
        assert_eq!(name, "a-b-c+de");
    }

    #[test]
    fn sanitize_maps_the_whole_table() {
        assert_eq!(sanitize(r#"x\y"z<w>v|u"#), "x-y'z(w)v-u");
    }

    #[test]
    fn sanitize_trims_whitespace_and_trailing_dots() {
        assert_eq!(sanitize("  spaced  "), "spaced");
        assert_eq!(sanitize("ends with dots..."), "ends with dots");
        assert_eq!(sanitize("dots then space. . "), "dots then space");
    }

    #[test]
    fn sanitize_truncates_long_titles() {
        let long = "x".repeat(250);
        assert_eq!(sanitize(&long).chars().count(), MAX_NAME_CHARS);

        let wide = "é".repeat(150);
        assert_eq!(sanitize(&wide).chars().count(), MAX_NAME_CHARS);
    }

    #[test]
    fn sanitize_falls_back_when_nothing_is_left() {
        assert_eq!(sanitize("???"), UNTITLED);
        assert_eq!(sanitize("..."), UNTITLED);
        assert_eq!(sanitize("   "), UNTITLED);
    }

    #[test]
    fn base_name_from_body() {
        assert_eq!(base_name_for("# Plans: Q3/Q4?\n..."), "Plans- Q3-Q4");
    }
}
