//! Turn a tree of statement descriptions into fragments by calling the
//! formatters and composers bottom-up.

use super::{blocks, Labels};
use crate::formatting;
use crate::language::{Fragment, GenerationError, Label, Statement};

/// Assemble a sequence of statements. Labels are allocated in the order
/// constructs appear in the source, so an outer loop is numbered before the
/// loops nested inside it.
pub fn assemble(labels: &mut Labels, statements: &[Statement]) -> Result<Vec<Fragment>, GenerationError> {
    statements
        .iter()
        .map(|statement| assemble_statement(labels, statement))
        .collect()
}

pub fn assemble_statement(labels: &mut Labels, statement: &Statement) -> Result<Fragment, GenerationError> {
    let fragment: Fragment = match statement {
        Statement::Call { name, arguments } => formatting::call(name, arguments)?.into(),
        Statement::Assign {
            destination,
            expression,
        } => formatting::assign(destination, expression)?.into(),
        Statement::Declare { category, names } => formatting::declare(category, names)?.into(),
        Statement::Common { name, names } => formatting::common(name, names)?.into(),
        Statement::Parameter { assignments } => formatting::parameter(assignments)?.into(),
        Statement::ImplicitNone => formatting::implicit_none().into(),
        Statement::Comment { text } => formatting::comment(text)?.into(),
        Statement::Continue { label } => formatting::continue_(Label::parse(label)?).into(),
        Statement::Goto { label } => formatting::goto(Label::parse(label)?).into(),
        Statement::IfGoto { condition, label } => {
            formatting::if_goto(condition, Label::parse(label)?)?.into()
        }
        Statement::Return => formatting::return_().into(),
        Statement::Stop => formatting::stop().into(),
        Statement::Text { text } => Fragment::from(text.as_str()),
        Statement::If {
            condition,
            then,
            otherwise,
        } => {
            let then = assemble(labels, then)?;
            match otherwise {
                Some(otherwise) => {
                    let otherwise = assemble(labels, otherwise)?;
                    blocks::if_then_else(condition, then, otherwise)?
                }
                None => blocks::if_then(condition, then)?,
            }
        }
        Statement::Do {
            index,
            start,
            end,
            step,
            body,
        } => {
            let label = labels.allocate()?;
            let body = assemble(labels, body)?;
            blocks::labeled_loop(label, index, start.clone(), end.clone(), step.clone(), body)?
        }
        Statement::Program { name, body } => {
            let body = assemble(labels, body)?;
            blocks::program(name, body)?
        }
        Statement::Subroutine {
            name,
            parameters,
            body,
        } => {
            let body = assemble(labels, body)?;
            blocks::subroutine(name, parameters, body)?
        }
        Statement::Function {
            category,
            name,
            parameters,
            body,
        } => {
            let body = assemble(labels, body)?;
            blocks::function(category, name, parameters, body)?
        }
        Statement::Open {
            unit,
            file,
            status,
            body,
        } => {
            let body = assemble(labels, body)?;
            blocks::open(unit, file, status.as_deref(), body)?
        }
        Statement::Close { unit } => formatting::close(unit)?.into(),
        Statement::Read {
            unit,
            label,
            formats,
            variables,
        } => match formats {
            Some(formats) => {
                exclusive(label)?;
                blocks::read_formatted(labels, unit, formats, variables)?
            }
            None => formatting::read(unit, optional(label)?, variables)?.into(),
        },
        Statement::Write {
            unit,
            label,
            formats,
            variables,
        } => match formats {
            Some(formats) => {
                exclusive(label)?;
                blocks::write_formatted(labels, unit, formats, variables)?
            }
            None => formatting::write(unit, optional(label)?, variables)?.into(),
        },
        Statement::Format { label, descriptors } => {
            formatting::format(Label::parse(label)?, descriptors)?.into()
        }
    };

    Ok(fragment)
}

fn optional(label: &Option<String>) -> Result<Option<Label>, GenerationError> {
    label
        .as_deref()
        .map(Label::parse)
        .transpose()
}

// A transfer with its own format list gets an allocated label; naming one
// as well is contradictory.
fn exclusive(label: &Option<String>) -> Result<(), GenerationError> {
    match label {
        Some(label) => Err(GenerationError::invalid(
            "Conflicting format label",
            format!(
                "label {} given together with a format list, which allocates its own",
                label
            ),
        )),
        None => Ok(()),
    }
}
