//! Formatters rendering one Fortran statement to one line of text.
//!
//! None of these know anything about their surroundings: indentation,
//! label placement in fixed form, and line continuation are applied later
//! when the lines are laid out for output. Names, expressions and
//! conditions are trusted to be valid Fortran and are passed through
//! verbatim.

use super::arguments::{optional_list, quote, required, required_list, text};
use crate::language::{Bound, GenerationError, Label};

/// Status used by `open` when none is given.
pub const DEFAULT_STATUS: &str = "unknown";

/// `call name(a, b)`. An empty argument list renders as `call name()`.
pub fn call<S: AsRef<str>>(name: &str, arguments: &[S]) -> Result<String, GenerationError> {
    let name = required("subroutine name", name)?;
    let arguments = optional_list("argument", arguments)?;
    Ok(format!("call {}({})", name, arguments))
}

/// `destination = expression`
pub fn assign(destination: &str, expression: &str) -> Result<String, GenerationError> {
    let destination = required("assignment destination", destination)?;
    let expression = required("expression", expression)?;
    Ok(format!("{} = {}", destination, expression))
}

/// `category a, b, c`. An `implicit` typing rule is written in its compact
/// form instead, so `implicit real*8` over `a-h`, `o-z` gives
/// `implicit real*8(a-h,o-z)`.
pub fn declare<S: AsRef<str>>(category: &str, names: &[S]) -> Result<String, GenerationError> {
    let category = required("type", category)?;
    let list = required_list("identifier", names)?;

    if category
        .trim()
        .eq_ignore_ascii_case("implicit none")
    {
        return Err(GenerationError::invalid(
            "Invalid declaration",
            "implicit none takes no identifiers; use implicit_none() instead",
        ));
    }

    if category.starts_with("implicit ") {
        let letters: Vec<&str> = names
            .iter()
            .map(|name| {
                name.as_ref()
                    .trim()
            })
            .collect();
        return Ok(format!("{}({})", category, letters.join(",")));
    }

    Ok(format!("{} {}", category, list))
}

/// `common /name/ a, b`
pub fn common<S: AsRef<str>>(name: &str, names: &[S]) -> Result<String, GenerationError> {
    let name = required("common block name", name)?;
    let list = required_list("variable", names)?;
    Ok(format!("common /{}/ {}", name, list))
}

/// `parameter (n = 10, m = 5)`
pub fn parameter<S: AsRef<str>>(assignments: &[S]) -> Result<String, GenerationError> {
    let list = required_list("parameter assignment", assignments)?;
    Ok(format!("parameter ({})", list))
}

pub fn implicit_none() -> String {
    "implicit none".to_string()
}

/// Comments are written in free form here; fixed form output replaces the
/// marker with a `c` in column 1.
pub fn comment(content: &str) -> Result<String, GenerationError> {
    let content = text("comment", content)?;
    if content.is_empty() {
        Ok("!".to_string())
    } else {
        Ok(format!("! {}", content))
    }
}

/// `100 continue`
pub fn continue_(label: Label) -> String {
    format!("{} continue", label)
}

/// `goto 100`
pub fn goto(label: Label) -> String {
    format!("goto {}", label)
}

/// `if (condition) goto 100`
pub fn if_goto(condition: &str, label: Label) -> Result<String, GenerationError> {
    let condition = required("condition", condition)?;
    Ok(format!("if ({}) goto {}", condition, label))
}

/// `if (condition) then`
pub fn if_then(condition: &str) -> Result<String, GenerationError> {
    let condition = required("condition", condition)?;
    Ok(format!("if ({}) then", condition))
}

pub fn else_() -> String {
    "else".to_string()
}

pub fn end_if() -> String {
    "end if".to_string()
}

/// Loop header. With a label this is `do 100 i = 1, 10`, and the caller is
/// responsible for closing it with a `continue` carrying the same label.
/// Without one it is the unlabeled `do i = 1, 10`, closed by `end do`. The
/// step is omitted entirely when not given.
pub fn do_header(
    label: Option<Label>,
    index: &str,
    start: &Bound,
    end: &Bound,
    step: Option<&Bound>,
) -> Result<String, GenerationError> {
    let index = required("loop index", index)?;
    let start = start.render()?;
    let end = end.render()?;

    let mut result = String::from("do ");
    if let Some(label) = label {
        result.push_str(&label.to_string());
        result.push(' ');
    }
    result.push_str(index);
    result.push_str(" = ");
    result.push_str(&start);
    result.push_str(", ");
    result.push_str(&end);

    if let Some(step) = step {
        result.push_str(", ");
        result.push_str(&step.render()?);
    }

    Ok(result)
}

pub fn end_do() -> String {
    "end do".to_string()
}

pub fn return_() -> String {
    "return".to_string()
}

pub fn stop() -> String {
    "stop".to_string()
}

/// Closer for programs, subroutines, and functions.
pub fn end() -> String {
    "end".to_string()
}

/// `program name`
pub fn program(name: &str) -> Result<String, GenerationError> {
    let name = required("program name", name)?;
    Ok(format!("program {}", name))
}

/// `subroutine name(a, b)`
pub fn subroutine<S: AsRef<str>>(name: &str, parameters: &[S]) -> Result<String, GenerationError> {
    let name = required("subroutine name", name)?;
    let parameters = optional_list("parameter", parameters)?;
    Ok(format!("subroutine {}({})", name, parameters))
}

/// `type function name(a, b)`
pub fn function<S: AsRef<str>>(
    category: &str,
    name: &str,
    parameters: &[S],
) -> Result<String, GenerationError> {
    let category = required("function type", category)?;
    let name = required("function name", name)?;
    let parameters = optional_list("parameter", parameters)?;
    Ok(format!("{} function {}({})", category, name, parameters))
}

/// `open(unit=10, file='data.txt', status='old')`. The file name is quoted
/// here; the status defaults to `unknown`.
pub fn open(unit: &str, file: &str, status: Option<&str>) -> Result<String, GenerationError> {
    let unit = required("unit", unit)?;
    let file = required("file name", file)?;
    let status = match status {
        Some(status) => required("status", status)?,
        None => DEFAULT_STATUS,
    };
    Ok(format!(
        "open(unit={}, file={}, status={})",
        unit,
        quote(file),
        quote(status)
    ))
}

/// `close(unit=10)`
pub fn close(unit: &str) -> Result<String, GenerationError> {
    let unit = required("unit", unit)?;
    Ok(format!("close(unit={})", unit))
}

/// `read(5, 100) i, x`, or `read(5) i, x` when there is no format label.
pub fn read<S: AsRef<str>>(
    unit: &str,
    label: Option<Label>,
    variables: &[S],
) -> Result<String, GenerationError> {
    transfer("read", unit, label, variables)
}

/// `write(6, 100) i, x`, or `write(6) i, x` when there is no format label.
pub fn write<S: AsRef<str>>(
    unit: &str,
    label: Option<Label>,
    variables: &[S],
) -> Result<String, GenerationError> {
    transfer("write", unit, label, variables)
}

fn transfer<S: AsRef<str>>(
    keyword: &str,
    unit: &str,
    label: Option<Label>,
    variables: &[S],
) -> Result<String, GenerationError> {
    let unit = required("unit", unit)?;
    let variables = optional_list("variable", variables)?;

    let mut result = format!("{}({}", keyword, unit);
    if let Some(label) = label {
        result.push_str(", ");
        result.push_str(&label.to_string());
    }
    result.push(')');

    if !variables.is_empty() {
        result.push(' ');
        result.push_str(&variables);
    }

    Ok(result)
}

/// `100 format(I3, F8.3)`
pub fn format<S: AsRef<str>>(label: Label, descriptors: &[S]) -> Result<String, GenerationError> {
    let descriptors = required_list("format descriptor", descriptors)?;
    Ok(format!("{} format({})", label, descriptors))
}
