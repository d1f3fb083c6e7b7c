//! Joining, quoting, and checking of the text arguments given to statements

use crate::language::GenerationError;

/// Join tokens with a comma and a space. An empty list joins to empty text.
pub fn join<S: AsRef<str>>(items: &[S]) -> String {
    let mut result = String::new();
    for (i, item) in items
        .iter()
        .enumerate()
    {
        if i > 0 {
            result.push_str(", ");
        }
        result.push_str(item.as_ref());
    }
    result
}

/// Wrap text as a character literal. Embedded apostrophes are doubled, which
/// is how Fortran escapes them.
pub fn quote(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 2);
    result.push('\'');
    for c in text.chars() {
        if c == '\'' {
            result.push('\'');
        }
        result.push(c);
    }
    result.push('\'');
    result
}

/// A name, condition, or expression that must be present. The text itself
/// is passed through exactly as given.
pub fn required<'a>(what: &str, value: &'a str) -> Result<&'a str, GenerationError> {
    if value
        .trim()
        .is_empty()
    {
        return Err(GenerationError::invalid(
            format!("Empty {}", what),
            format!("the {} must not be empty", what),
        ));
    }
    single(what, value)
}

/// A list that must have at least one entry.
pub fn required_list<S: AsRef<str>>(what: &str, items: &[S]) -> Result<String, GenerationError> {
    if items.is_empty() {
        return Err(GenerationError::invalid(
            format!("Empty {} list", what),
            format!("at least one {} is required", what),
        ));
    }
    optional_list(what, items)
}

/// A list that may be empty, but none of whose entries may be blank (which
/// would leave a dangling separator in the output).
pub fn optional_list<S: AsRef<str>>(what: &str, items: &[S]) -> Result<String, GenerationError> {
    for item in items {
        required(what, item.as_ref())?;
    }
    Ok(join(items))
}

// statements occupy exactly one line
fn single<'a>(what: &str, value: &'a str) -> Result<&'a str, GenerationError> {
    if value.contains('\n') || value.contains('\r') {
        return Err(GenerationError::invalid(
            format!("Multi-line {}", what),
            format!("the {} must fit on a single line", what),
        ));
    }
    Ok(value)
}

/// Free text (such as a comment) which may be empty but must still be a
/// single line.
pub fn text<'a>(what: &str, value: &'a str) -> Result<&'a str, GenerationError> {
    single(what, value)
}
