//! Structured descriptions of a whole source file, as read from a TOML
//! descriptor. Every statement kind here maps onto one formatter or one
//! block composer.

use serde::{Deserialize, Serialize};

use super::{Bound, Encoding, LineEnding, Style};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub statements: Vec<Statement>,
}

/// Output options carried in the descriptor itself. Anything left unset
/// falls back to the built-in defaults, and command-line flags take
/// precedence over all of it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub style: Option<Style>,
    pub line_ending: Option<LineEnding>,
    pub encoding: Option<Encoding>,
    pub max_line_length: Option<usize>,
    pub first_label: Option<u32>,
    pub label_step: Option<u32>,
    pub banner: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Statement {
    Call {
        name: String,
        #[serde(default)]
        arguments: Vec<String>,
    },
    Assign {
        destination: String,
        expression: String,
    },
    Declare {
        #[serde(rename = "type")]
        category: String,
        names: Vec<String>,
    },
    Common {
        name: String,
        names: Vec<String>,
    },
    Parameter {
        assignments: Vec<String>,
    },
    ImplicitNone,
    Comment {
        text: String,
    },
    Continue {
        label: String,
    },
    Goto {
        label: String,
    },
    IfGoto {
        condition: String,
        label: String,
    },
    Return,
    Stop,
    /// A line passed through untouched.
    Text {
        text: String,
    },
    If {
        condition: String,
        #[serde(default)]
        then: Vec<Statement>,
        #[serde(default)]
        otherwise: Option<Vec<Statement>>,
    },
    Do {
        index: String,
        start: Bound,
        end: Bound,
        #[serde(default)]
        step: Option<Bound>,
        #[serde(default)]
        body: Vec<Statement>,
    },
    Program {
        name: String,
        #[serde(default)]
        body: Vec<Statement>,
    },
    Subroutine {
        name: String,
        #[serde(default)]
        parameters: Vec<String>,
        #[serde(default)]
        body: Vec<Statement>,
    },
    Function {
        #[serde(rename = "type")]
        category: String,
        name: String,
        #[serde(default)]
        parameters: Vec<String>,
        #[serde(default)]
        body: Vec<Statement>,
    },
    Open {
        unit: String,
        file: String,
        #[serde(default)]
        status: Option<String>,
        #[serde(default)]
        body: Vec<Statement>,
    },
    Close {
        unit: String,
    },
    Read {
        unit: String,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        formats: Option<Vec<String>>,
        #[serde(default)]
        variables: Vec<String>,
    },
    Write {
        unit: String,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        formats: Option<Vec<String>>,
        #[serde(default)]
        variables: Vec<String>,
    },
    Format {
        label: String,
        descriptors: Vec<String>,
    },
}
