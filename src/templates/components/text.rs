use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A `<` with no closing `>` is plain text and stays.
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref BREAK_REGEX: Regex = Regex::new(r"(?i)<br\s*/?>").unwrap();
}

/// Plain single-line excerpt of at most `max` characters, `...` appended when cut.
pub fn shorten(text: Option<&str>, max: usize) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let clean = TAG_REGEX
        .replace_all(text, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if clean.chars().count() <= max {
        return clean;
    }

    let mut cut: String = clean.chars().take(max).collect();
    cut.push_str("...");
    cut
}

/// Full description as plain text; `<br>` variants become line breaks.
pub fn description_text(html: &str) -> String {
    let with_breaks = BREAK_REGEX.replace_all(html, "\n");
    TAG_REGEX.replace_all(&with_breaks, "").into_owned()
}

pub fn plural(n: u32, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}
