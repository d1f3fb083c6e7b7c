use owo_colors::OwoColorize;
use std::path::Path;
use macrofor::{
    language::{GenerationError, LoadingError},
    parsing::ParsingError,
};

/// Format a parsing error with full details including the offending line
/// from the descriptor.
pub fn full_parsing_error<'i>(error: &ParsingError, filename: &'i Path, source: &'i str) -> String {
    let offset = error
        .offset()
        .min(source.len());

    let i = calculate_line_number(source, offset);
    let j = calculate_column_number(source, offset);

    let code = source
        .lines()
        .nth(i)
        .unwrap_or("?");
    let line = i + 1;
    let column = j + 1;
    let width = 3.max(
        line.to_string()
            .len(),
    );

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}
        "#,
        "error".bright_red(),
        filename.to_string_lossy(),
        line,
        column,
        error
            .problem
            .bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        code,
        ' ',
        '|'.bright_blue(),
        '^'.bright_red(),
    )
    .trim_ascii()
    .to_string()
}

/// Format a parsing error with concise single-line output
pub fn concise_parsing_error<'i>(error: &ParsingError, filename: &'i Path, source: &'i str) -> String {
    let offset = error
        .offset()
        .min(source.len());
    let i = calculate_line_number(source, offset);
    let j = calculate_column_number(source, offset);
    let line = i + 1;
    let column = j + 1;

    format!(
        "{}: {}:{}:{} {}",
        "error".bright_red(),
        filename.to_string_lossy(),
        line,
        column,
        error
            .problem
            .bold(),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    let mut result = format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    );
    if !error
        .details
        .is_empty()
    {
        result.push_str(&format!(" ({})", error.details));
    }
    result
}

/// Format a GenerationError, naming the descriptor it arose from.
pub fn concise_generation_error(error: &GenerationError, filename: &Path) -> String {
    match error {
        GenerationError::InvalidArgument { problem, details } => format!(
            "{}: {}: {}\n{}",
            "error".bright_red(),
            filename.to_string_lossy(),
            problem.bold(),
            details
        ),
        GenerationError::Filesystem {
            problem,
            details,
            filename,
        } => format!(
            "{}: {} {}: {}",
            "error".bright_red(),
            problem.bold(),
            filename.to_string_lossy(),
            details
        ),
    }
}

// This returns a zero-origin result so that it can subsequently be used for
// splitting; for display to humans you'll have to add 1.
fn calculate_line_number(content: &str, offset: usize) -> usize {
    content[..offset]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

// Calculate the column number, also zero-origin for consistency.
fn calculate_column_number(content: &str, offset: usize) -> usize {
    let before = &content[..offset];
    match before.rfind('\n') {
        Some(start) => content[start + 1..offset]
            .chars()
            .count(),
        None => before
            .chars()
            .count(),
    }
}
