//! Line-level parsing of "category: amount" entries.

use once_cell::sync::Lazy;
use regex::Regex;

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?\d+").expect("valid integer pattern"));

/// One successfully parsed input line: a raw category name and a signed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub name: String,
    pub value: i64,
}

/// Splits one input line into a name and an integer value.
///
/// The separator is `:` when the line contains one, `-` otherwise. Only the
/// first separator occurrence is structural; everything after it is the value
/// blob, from which the first `-?\d+` substring is taken. Returns `None` when
/// the line has no separator, the name is empty, or no integer is found.
pub fn parse_line(line: &str) -> Option<ParsedEntry> {
    let separator = if line.contains(':') { ':' } else { '-' };
    let (left, rest) = line.split_once(separator)?;

    let name = left.trim();
    let value_part = rest.trim();
    if name.is_empty() {
        return None;
    }

    let value = INTEGER.find(value_part)?.as_str().parse::<i64>().ok()?;
    Some(ParsedEntry {
        name: name.to_owned(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, value: i64) -> ParsedEntry {
        ParsedEntry {
            name: name.to_owned(),
            value,
        }
    }

    #[test]
    fn parses_colon_separated_line() {
        assert_eq!(parse_line("Кофе: 120"), Some(entry("Кофе", 120)));
    }

    #[test]
    fn parses_dash_separated_negative_value() {
        assert_eq!(parse_line("Такси - -15"), Some(entry("Такси", -15)));
    }

    #[test]
    fn only_first_separator_is_structural() {
        // A second colon belongs to the value blob, not the name.
        assert_eq!(parse_line("Обед: 300: чаевые"), Some(entry("Обед", 300)));
        assert_eq!(parse_line("Ре-монт - 500"), Some(entry("Ре", 500)));
    }

    #[test]
    fn extracts_first_integer_from_noisy_value() {
        assert_eq!(parse_line("Продукты: примерно 450 руб"), Some(entry("Продукты", 450)));
    }

    #[test]
    fn colon_wins_over_dash() {
        assert_eq!(parse_line("Кафе-бар: 200"), Some(entry("Кафе-бар", 200)));
    }

    #[test]
    fn rejects_unparseable_lines() {
        assert_eq!(parse_line("garbage line no colon no dash no number"), None);
        assert_eq!(parse_line("Еда: без числа"), None);
        assert_eq!(parse_line(": 100"), None);
        assert_eq!(parse_line(""), None);
    }
}
