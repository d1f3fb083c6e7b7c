//! Lay out lines in fixed or free source form, placing labels and comments
//! in the columns the form requires and continuing statements that are too
//! long for a single line.

use crate::language::{Fragment, Line, Style};

use super::Emission;

// however deeply a statement is nested, leave at least this many columns
// for its content
const MINIMUM_WIDTH: usize = 8;

/// Produce the physical lines of output, without line endings.
pub fn layout(fragments: &[Fragment], emission: &Emission) -> Vec<String> {
    let limit = emission.limit();
    let mut result = Vec::new();

    for fragment in fragments {
        for line in fragment.lines() {
            match emission.style {
                Style::Fixed => fixed(&line, limit, &mut result),
                Style::Free => free(&line, limit, &mut result),
            }
        }
    }

    result
}

enum Statement<'i> {
    Comment(&'i str),
    // leading whitespace, label, statement
    Labeled(&'i str, &'i str, &'i str),
    Plain(&'i str),
}

fn classify<'i>(text: &'i str) -> Statement<'i> {
    let trimmed = text.trim_start();
    if let Some(content) = trimmed.strip_prefix('!') {
        return Statement::Comment(content.trim_start());
    }

    let re = regex!(r"^(\s*)([0-9]{1,5})\s+(\S.*)$");
    if let Some(cap) = re.captures(text) {
        if let (Some(lead), Some(label), Some(rest)) = (cap.get(1), cap.get(2), cap.get(3)) {
            return Statement::Labeled(lead.as_str(), label.as_str(), rest.as_str());
        }
    }

    Statement::Plain(text)
}

/// Columns 1-5 hold the label, column 6 the continuation marker, and the
/// statement proper begins in column 7. Comments have `c` in column 1.
fn fixed(line: &Line, limit: usize, result: &mut Vec<String>) {
    let (field, lead, content) = match classify(line.text) {
        Statement::Comment(content) => {
            if content.is_empty() {
                result.push("c".to_string());
            } else {
                result.push(format!("c     {}", content));
            }
            return;
        }
        Statement::Labeled(lead, label, rest) => (format!("{:>5} ", label), width(lead), rest),
        Statement::Plain(text) => ("      ".to_string(), 0, text),
    };

    // text nested from an already rendered block carries its own indentation
    // in front of the label
    let indent = " ".repeat(line.indentation() + lead);

    let first = field.len() + indent.len();
    if first + width(content) <= limit {
        result.push(format!("{}{}{}", field, indent, content));
        return;
    }

    let pieces = split(
        content,
        capacity(limit, first),
        capacity(limit, 6),
    );
    for (i, piece) in pieces
        .iter()
        .enumerate()
    {
        if i == 0 {
            result.push(format!("{}{}{}", field, indent, piece.text));
        } else {
            result.push(format!("     &{}", piece.text));
        }
    }
}

/// Statements are indented by depth. A continued line ends with `&` and
/// the next line resumes after a leading `&`.
fn free(line: &Line, limit: usize, result: &mut Vec<String>) {
    let indent = " ".repeat(line.indentation());

    let content = match classify(line.text) {
        Statement::Comment(_) => {
            result.push(format!("{}{}", indent, line.text.trim_start()));
            return;
        }
        _ => line.text,
    };

    if indent.len() + width(content) <= limit {
        result.push(format!("{}{}", indent, content));
        return;
    }

    // two columns are kept free for the trailing marker
    let pieces = split(
        content,
        capacity(limit, indent.len() + 2),
        capacity(limit, indent.len() + 3),
    );
    let count = pieces.len();
    for (i, piece) in pieces
        .iter()
        .enumerate()
    {
        let mut physical = String::with_capacity(limit);
        physical.push_str(&indent);
        if i > 0 {
            physical.push('&');
        }
        physical.push_str(piece.text);
        if i + 1 < count {
            if piece.split_word {
                physical.push('&');
            } else {
                physical.push_str(" &");
            }
        }
        result.push(physical);
    }
}

fn width(text: &str) -> usize {
    text.chars()
        .count()
}

fn capacity(limit: usize, used: usize) -> usize {
    limit
        .saturating_sub(used)
        .max(MINIMUM_WIDTH)
}

struct Piece<'i> {
    text: &'i str,
    // true when the break after this piece falls inside a token or
    // character literal rather than at a blank
    split_word: bool,
}

/// Break text into pieces no wider than the given capacities, preferring to
/// break before a blank that is outside a character literal. The blank is
/// kept at the start of the following piece so that nothing is lost when
/// the pieces are joined back together.
fn split(content: &str, first: usize, rest: usize) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut remaining = content;
    let mut capacity = first;
    let mut quoted = false;

    loop {
        if width(remaining) <= capacity {
            pieces.push(Piece {
                text: remaining,
                split_word: false,
            });
            break;
        }

        let mut inside = quoted;
        let mut blank = None;
        let mut cut = (remaining.len(), inside);

        for (count, (index, c)) in remaining
            .char_indices()
            .enumerate()
        {
            if count == capacity {
                cut = (index, inside);
                break;
            }
            if c == '\'' {
                inside = !inside;
            } else if c == ' ' && !inside && count > 0 {
                blank = Some(index);
            }
        }

        match blank {
            Some(index) => {
                pieces.push(Piece {
                    text: &remaining[..index],
                    split_word: false,
                });
                remaining = &remaining[index..];
                quoted = false;
            }
            None => {
                let (index, inside) = cut;
                pieces.push(Piece {
                    text: &remaining[..index],
                    split_word: true,
                });
                remaining = &remaining[index..];
                quoted = inside;
            }
        }

        capacity = rest;
    }

    pieces
}
