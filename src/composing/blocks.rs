//! Block composers: wrap a body of already rendered fragments with a
//! matching opener and closer.
//!
//! A body element is either a single line or the result of another
//! composer. Each enclosing block adds one level of indentation to every
//! line inside it, so depth accumulates however the nesting was built.

use super::Labels;
use crate::formatting;
use crate::language::{Block, Bound, Fragment, GenerationError, Label, Part};

fn collect<I>(items: I) -> Vec<Fragment>
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    items
        .into_iter()
        .map(Into::into)
        .collect()
}

fn enclose(opener: String, body: Vec<Fragment>, closer: String) -> Fragment {
    Fragment::Block(Block {
        parts: vec![Part::Line(opener), Part::Body(body), Part::Line(closer)],
    })
}

/// `if (condition) then` ... `end if`
pub fn if_then<I>(condition: &str, body: I) -> Result<Fragment, GenerationError>
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    let opener = formatting::if_then(condition)?;
    Ok(enclose(opener, collect(body), formatting::end_if()))
}

/// `if (condition) then` ... `else` ... `end if`
pub fn if_then_else<T, E>(
    condition: &str,
    then_body: T,
    else_body: E,
) -> Result<Fragment, GenerationError>
where
    T: IntoIterator,
    T::Item: Into<Fragment>,
    E: IntoIterator,
    E::Item: Into<Fragment>,
{
    let opener = formatting::if_then(condition)?;
    Ok(Fragment::Block(Block {
        parts: vec![
            Part::Line(opener),
            Part::Body(collect(then_body)),
            Part::Line(formatting::else_()),
            Part::Body(collect(else_body)),
            Part::Line(formatting::end_if()),
        ],
    }))
}

/// A bounded loop closed by a labeled `continue`. The label is taken from
/// the allocator, so the header and closer always agree.
pub fn do_loop<I>(
    labels: &mut Labels,
    index: &str,
    start: impl Into<Bound>,
    end: impl Into<Bound>,
    step: Option<Bound>,
    body: I,
) -> Result<Fragment, GenerationError>
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    let start: Bound = start.into();
    let end: Bound = end.into();

    // check the header before spending a label on it
    formatting::do_header(None, index, &start, &end, step.as_ref())?;

    let label = labels.allocate()?;
    labeled_loop(label, index, start, end, step, body)
}

/// As [`do_loop`], for a label the caller has already allocated.
pub fn labeled_loop<I>(
    label: Label,
    index: &str,
    start: impl Into<Bound>,
    end: impl Into<Bound>,
    step: Option<Bound>,
    body: I,
) -> Result<Fragment, GenerationError>
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    let opener = formatting::do_header(
        Some(label),
        index,
        &start.into(),
        &end.into(),
        step.as_ref(),
    )?;
    Ok(enclose(opener, collect(body), formatting::continue_(label)))
}

/// `program name` ... `end`
pub fn program<I>(name: &str, body: I) -> Result<Fragment, GenerationError>
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    let opener = formatting::program(name)?;
    Ok(enclose(opener, collect(body), formatting::end()))
}

/// `subroutine name(a, b)` ... `end`
pub fn subroutine<S, I>(name: &str, parameters: &[S], body: I) -> Result<Fragment, GenerationError>
where
    S: AsRef<str>,
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    let opener = formatting::subroutine(name, parameters)?;
    Ok(enclose(opener, collect(body), formatting::end()))
}

/// `type function name(a, b)` ... `end`
pub fn function<S, I>(
    category: &str,
    name: &str,
    parameters: &[S],
    body: I,
) -> Result<Fragment, GenerationError>
where
    S: AsRef<str>,
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    let opener = formatting::function(category, name, parameters)?;
    Ok(enclose(opener, collect(body), formatting::end()))
}

/// `open(unit=...)` ... `close(unit=...)`, both ends naming the same unit.
/// Whatever unit the body itself refers to is the caller's business.
pub fn open<I>(
    unit: &str,
    file: &str,
    status: Option<&str>,
    body: I,
) -> Result<Fragment, GenerationError>
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    let opener = formatting::open(unit, file, status)?;
    let closer = formatting::close(unit)?;
    Ok(enclose(opener, collect(body), closer))
}

/// A `read` referencing a freshly allocated label, followed by the `format`
/// line carrying that label.
pub fn read_formatted<D, V>(
    labels: &mut Labels,
    unit: &str,
    descriptors: &[D],
    variables: &[V],
) -> Result<Fragment, GenerationError>
where
    D: AsRef<str>,
    V: AsRef<str>,
{
    formatted(labels, formatting::read::<V>, unit, descriptors, variables)
}

/// A `write` referencing a freshly allocated label, followed by the
/// `format` line carrying that label.
pub fn write_formatted<D, V>(
    labels: &mut Labels,
    unit: &str,
    descriptors: &[D],
    variables: &[V],
) -> Result<Fragment, GenerationError>
where
    D: AsRef<str>,
    V: AsRef<str>,
{
    formatted(labels, formatting::write::<V>, unit, descriptors, variables)
}

fn formatted<D, V>(
    labels: &mut Labels,
    transfer: fn(&str, Option<Label>, &[V]) -> Result<String, GenerationError>,
    unit: &str,
    descriptors: &[D],
    variables: &[V],
) -> Result<Fragment, GenerationError>
where
    D: AsRef<str>,
    V: AsRef<str>,
{
    // check the fields before spending a label on them
    formatting::required("unit", unit)?;
    formatting::required_list("format descriptor", descriptors)?;
    formatting::optional_list("variable", variables)?;

    let label = labels.allocate()?;
    let statement = transfer(unit, Some(label), variables)?;
    let format = formatting::format(label, descriptors)?;

    Ok(Fragment::Block(Block {
        parts: vec![Part::Line(statement), Part::Line(format)],
    }))
}
