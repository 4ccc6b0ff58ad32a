//! Bounded string rendering for diagnostics
//!
//! Violation messages embed the offending evidence, which may be an
//! arbitrarily large list or string. Everything rendered here is cut down to
//! a length budget so that messages stay readable:
//!
//! - scalars longer than the budget keep their head and tail around `...`
//! - strings are quoted with `"` and characters with `'`, quotes included in
//!   the budget
//! - lists and maps print as many elements as fit, each capped at
//!   [`DEFAULT_ELEMENT_LENGTH`], followed by `...(N more)`; the marker counts
//!   against the budget, except when not even one element fits beside it
//!
//! A budget of `0` means unbounded.

use crate::value::Value;

/// Budget for a single element inside a list or map
pub const DEFAULT_ELEMENT_LENGTH: usize = 20;

/// Budget for the evidence embedded in a violation message
pub const DEFAULT_EVIDENCE_LENGTH: usize = 40;

const ELLIPSIS: &str = "...";

/// Render a value within `max_length` characters
pub fn render(value: &Value, max_length: usize) -> String {
    match value {
        Value::List(items) => render_sequence(
            "[",
            "]",
            items.iter().map(Entry::Plain),
            items.len(),
            max_length,
        ),
        Value::Map(map) => {
            let entries = Value::sorted_entries(map);
            let count = entries.len();
            render_sequence(
                "{",
                "}",
                entries
                    .into_iter()
                    .map(|(key, value)| Entry::Keyed(key, value)),
                count,
                max_length,
            )
        }
        Value::String(s) => quoted('"', s, max_length),
        Value::Char(c) => quoted('\'', &c.to_string(), max_length),
        other => elide(&other.to_string(), max_length),
    }
}

/// Render with the default evidence budget
pub fn render_default(value: &Value) -> String {
    render(value, DEFAULT_EVIDENCE_LENGTH)
}

/// Shorten `text` to at most `max_length` characters by replacing its
/// middle with `...`
pub fn elide(text: &str, max_length: usize) -> String {
    let length = text.chars().count();
    if max_length == 0 || length <= max_length {
        return text.to_string();
    }
    if max_length <= ELLIPSIS.len() {
        return text.chars().take(max_length).collect();
    }

    let keep = max_length - ELLIPSIS.len();
    let head = (keep + 1) / 2;
    let tail = keep - head;
    let mut elided: String = text.chars().take(head).collect();
    elided.push_str(ELLIPSIS);
    elided.extend(text.chars().skip(length - tail));
    elided
}

fn quoted(quote: char, text: &str, max_length: usize) -> String {
    let budget = if max_length == 0 {
        0
    } else {
        max_length.saturating_sub(2).max(1)
    };
    format!("{quote}{}{quote}", elide(text, budget))
}

enum Entry<'a> {
    Plain(&'a Value),
    Keyed(&'a String, &'a Value),
}

impl Entry<'_> {
    fn render(&self, max_length: usize) -> String {
        match self {
            Entry::Plain(value) => render(value, max_length),
            Entry::Keyed(key, value) => {
                let prefix = format!("{}: ", key);
                let remaining = if max_length == 0 {
                    0
                } else {
                    max_length.saturating_sub(prefix.chars().count()).max(1)
                };
                format!("{}{}", prefix, render(value, remaining))
            }
        }
    }
}

fn render_sequence<'a>(
    open: &str,
    close: &str,
    entries: impl Iterator<Item = Entry<'a>>,
    count: usize,
    max_length: usize,
) -> String {
    if max_length == 0 {
        let rendered: Vec<String> = entries.map(|entry| entry.render(0)).collect();
        return format!("{}{}{}", open, rendered.join(", "), close);
    }

    let budget = max_length.saturating_sub(open.len() + close.len());
    let mut rendered: Vec<String> = Vec::new();
    let mut used = 0usize;

    for entry in entries {
        let separator = if rendered.is_empty() { 0 } else { 2 };
        let room = budget.saturating_sub(used + separator);
        if room == 0 {
            break;
        }
        let text = entry.render(room.min(DEFAULT_ELEMENT_LENGTH));
        let cost = separator + text.chars().count();
        if used + cost > budget {
            break;
        }
        used += cost;
        rendered.push(text);
    }

    // Drop trailing elements until the remainder marker fits as well
    while !rendered.is_empty() && rendered.len() < count {
        let marker = remainder(count - rendered.len()).chars().count() + 2;
        if used + marker <= budget {
            break;
        }
        if let Some(last) = rendered.pop() {
            let separator = if rendered.is_empty() { 0 } else { 2 };
            used -= separator + last.chars().count();
        }
    }

    let mut out = String::from(open);
    out.push_str(&rendered.join(", "));
    if rendered.len() < count {
        if !rendered.is_empty() {
            out.push_str(", ");
        }
        out.push_str(&remainder(count - rendered.len()));
    }
    out.push_str(close);
    out
}

fn remainder(unprinted: usize) -> String {
    format!("{}({} more)", ELLIPSIS, unprinted)
}

#[cfg(test)]
#[path = "bounded_tests.rs"]
mod tests;
