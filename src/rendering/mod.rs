//! Syntax highlighting of generated source for display on a terminal

use crate::language::Style;

mod syntax;
mod terminal;

pub use syntax::*;
pub use terminal::Terminal;

/// We do the highlighting in two passes. First we split the laid out source
/// into a Vec of "fragments" (Syntax tag, &str pairs). Then second we apply
/// the specified renderer to each pair to result in an embellished String.
pub fn render(renderer: &impl Render, text: &str, style: Style) -> String {
    // Pass 1: Classify source text into tagged fragments
    let fragments = highlight(text, style);

    // Pass 2: Render tagged fragments to final output
    render_to_string(renderer, fragments)
}

/// Pass 1: split source text into tagged fragments. Concatenating the
/// fragments gives back the input, apart from line endings which are
/// normalized to a single newline.
pub fn highlight(text: &str, style: Style) -> Vec<(Syntax, &str)> {
    let mut result = Vec::new();

    for line in text.lines() {
        match style {
            Style::Fixed => fixed(line, &mut result),
            Style::Free => free(line, &mut result),
        }
        result.push((Syntax::Newline, "\n"));
    }

    result
}

fn fixed<'i>(line: &'i str, result: &mut Vec<(Syntax, &'i str)>) {
    if line == "c" || line.starts_with("c ") || line.starts_with('C') || line.starts_with('*') {
        result.push((Syntax::Comment, line));
        return;
    }

    let re = regex!(r"^([ 0-9]{5})([ &])(.*)$");
    if let Some(cap) = re.captures(line) {
        if let (Some(field), Some(marker), Some(rest)) = (cap.get(1), cap.get(2), cap.get(3)) {
            let field = field.as_str();
            let digits = field.trim_start();
            let spaces = &field[..field.len() - digits.len()];

            if !spaces.is_empty() {
                result.push((Syntax::Indent, spaces));
            }
            if !digits.is_empty() {
                result.push((Syntax::Label, digits));
            }

            match marker.as_str() {
                "&" => result.push((Syntax::Continuation, marker.as_str())),
                _ => result.push((Syntax::Indent, marker.as_str())),
            }

            let rest = rest.as_str();
            let content = rest.trim_start();
            let indent = &rest[..rest.len() - content.len()];
            if !indent.is_empty() {
                result.push((Syntax::Indent, indent));
            }
            tokens(content, result);
            return;
        }
    }

    tokens(line, result);
}

fn free<'i>(line: &'i str, result: &mut Vec<(Syntax, &'i str)>) {
    let content = line.trim_start();
    let indent = &line[..line.len() - content.len()];
    if !indent.is_empty() {
        result.push((Syntax::Indent, indent));
    }

    if content.starts_with('!') {
        result.push((Syntax::Comment, content));
        return;
    }

    if content.starts_with('&') {
        result.push((Syntax::Continuation, &content[..1]));
        tokens(&content[1..], result);
        return;
    }

    let re = regex!(r"^([0-9]{1,5})( +)(.*)$");
    if let Some(cap) = re.captures(content) {
        if let (Some(label), Some(gap), Some(rest)) = (cap.get(1), cap.get(2), cap.get(3)) {
            result.push((Syntax::Label, label.as_str()));
            result.push((Syntax::Neutral, gap.as_str()));
            tokens(rest.as_str(), result);
            return;
        }
    }

    tokens(content, result);
}

const GROUPS: [(&str, Syntax); 6] = [
    ("string", Syntax::String),
    ("operator", Syntax::Operator),
    ("numeric", Syntax::Numeric),
    ("continuation", Syntax::Continuation),
    ("structure", Syntax::Structure),
    ("other", Syntax::Neutral),
];

fn tokens<'i>(text: &'i str, result: &mut Vec<(Syntax, &'i str)>) {
    let re = regex!(
        r"(?x)
            (?P<string>'(?:[^']|'')*'?)
          | (?P<operator>\.[A-Za-z]+\.|[-+*/=<>]+)
          | (?P<numeric>[0-9]+(?:\.[0-9]*)?(?:[eEdD][-+]?[0-9]+)?)
          | (?P<word>[A-Za-z_][A-Za-z0-9_]*)
          | (?P<continuation>&)
          | (?P<structure>[(),:])
          | (?P<other>\s+|.)
        "
    );

    for cap in re.captures_iter(text) {
        if let Some(m) = cap.name("word") {
            result.push((word(m.as_str()), m.as_str()));
            continue;
        }
        for (name, syntax) in GROUPS {
            if let Some(m) = cap.name(name) {
                result.push((syntax, m.as_str()));
                break;
            }
        }
    }
}

fn word(text: &str) -> Syntax {
    match text
        .to_ascii_lowercase()
        .as_str()
    {
        "call" | "do" | "continue" | "if" | "then" | "else" | "end" | "endif" | "enddo"
        | "goto" | "go" | "to" | "return" | "stop" | "program" | "subroutine" | "function"
        | "open" | "close" | "read" | "write" | "format" | "common" | "parameter"
        | "implicit" | "none" => Syntax::Keyword,
        "integer" | "real" | "double" | "precision" | "complex" | "logical" | "character" => {
            Syntax::Declaration
        }
        _ => Syntax::Neutral,
    }
}

/// Pass 2: apply markup to fragments via style() and combine.
fn render_to_string(renderer: &impl Render, fragments: Vec<(Syntax, &str)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, content);
        output.push_str(&rendered);
    }

    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }

    output
}
