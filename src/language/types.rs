//! Types representing generated Fortran source before it is laid out

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::GenerationError;

/// Spaces added for each level of nesting.
pub const INDENT: usize = 2;

/// Statement labels in Fortran are at most five digits.
pub const MAXIMUM_LABEL: u32 = 99999;

/// One element of a body: either a single statement line, or a multi-line
/// construct assembled by one of the block composers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fragment {
    Line(String),
    Block(Block),
}

/// A construct made of opener, body, separator and closer parts. Lines are
/// emitted at the depth of the block; bodies are emitted one level deeper.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Block {
    pub parts: Vec<Part>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Part {
    Line(String),
    Body(Vec<Fragment>),
}

/// A physical line of output and the number of blocks enclosing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line<'i> {
    pub depth: usize,
    pub text: &'i str,
}

impl Fragment {
    /// Flatten into physical lines. Blank lines are dropped.
    pub fn lines(&self) -> Vec<Line<'_>> {
        let mut result = Vec::new();
        self.collect(0, &mut result);
        result
    }

    fn collect<'i>(&'i self, depth: usize, result: &mut Vec<Line<'i>>) {
        match self {
            Fragment::Line(text) => push(depth, text, result),
            Fragment::Block(block) => {
                for part in &block.parts {
                    match part {
                        Part::Line(text) => push(depth, text, result),
                        Part::Body(body) => {
                            for fragment in body {
                                fragment.collect(depth + 1, result);
                            }
                        }
                    }
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines()
            .is_empty()
    }
}

// text given as a single line may still contain newlines if it was built
// by hand; each physical line is kept separately so it gets indented.
fn push<'i>(depth: usize, text: &'i str, result: &mut Vec<Line<'i>>) {
    for text in text.lines() {
        if !text
            .trim()
            .is_empty()
        {
            result.push(Line { depth, text });
        }
    }
}

impl Line<'_> {
    pub fn indentation(&self) -> usize {
        self.depth * INDENT
    }
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:width$}{}", "", self.text, width = self.indentation())
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self
            .lines()
            .iter()
            .enumerate()
        {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

// Text that already spans several lines (typically the Display output of
// another block) is split so that each physical line picks up the
// indentation of whatever block it is placed into.
impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        if text.contains('\n') {
            Fragment::Block(Block {
                parts: text
                    .lines()
                    .map(|line| Part::Line(line.to_string()))
                    .collect(),
            })
        } else {
            Fragment::Line(text.to_string())
        }
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        if text.contains('\n') {
            Fragment::from(text.as_str())
        } else {
            Fragment::Line(text)
        }
    }
}

impl From<&String> for Fragment {
    fn from(text: &String) -> Self {
        Fragment::from(text.as_str())
    }
}

impl From<Block> for Fragment {
    fn from(block: Block) -> Self {
        Fragment::Block(block)
    }
}

/// A statement label, used to pair a loop with its closing `continue` or
/// an I/O statement with its `format` line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label(u32);

impl Label {
    pub fn new(number: u32) -> Result<Label, GenerationError> {
        if number == 0 || number > MAXIMUM_LABEL {
            return Err(GenerationError::invalid(
                "Label out of range",
                format!("{} is not between 1 and {}", number, MAXIMUM_LABEL),
            ));
        }
        Ok(Label(number))
    }

    /// Accept one to five digits, not all of them zero.
    pub fn parse(input: &str) -> Result<Label, GenerationError> {
        let re = regex!(r"^[0-9]{1,5}$");

        if !re.is_match(input) {
            return Err(GenerationError::invalid(
                "Invalid label",
                format!("'{}' is not a label of one to five digits", input),
            ));
        }

        let number = input
            .parse::<u32>()
            .map_err(|error| GenerationError::invalid("Invalid label", error.to_string()))?;

        Label::new(number)
    }

    pub fn number(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Label {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Label::parse(s)
    }
}

/// A loop bound or step: a literal integer, or an expression passed
/// through as opaque text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bound {
    Integer(i64),
    Text(String),
}

impl Bound {
    /// Text that is a single numeric token must be a whole integer, so `1.5`
    /// or `10x` are refused. Anything else, such as `2*n` or `n - 1`, is an
    /// expression and is not looked into further.
    pub fn render(&self) -> Result<String, GenerationError> {
        match self {
            Bound::Integer(number) => Ok(number.to_string()),
            Bound::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(GenerationError::invalid(
                        "Empty loop bound",
                        "a loop bound or step must not be empty",
                    ));
                }
                if text.contains('\n') || text.contains('\r') {
                    return Err(GenerationError::invalid(
                        "Multi-line loop bound",
                        "a loop bound or step must fit on a single line",
                    ));
                }
                let numeric = regex!(r"^[+-]?[0-9.][0-9A-Za-z_.]*$");
                let integer = regex!(r"^[+-]?[0-9]+$");
                if numeric.is_match(text) && !integer.is_match(text) {
                    return Err(GenerationError::invalid(
                        "Malformed numeric bound",
                        format!("'{}' is not an integer", text),
                    ));
                }
                Ok(text.to_string())
            }
        }
    }
}

impl From<i64> for Bound {
    fn from(number: i64) -> Self {
        Bound::Integer(number)
    }
}

impl From<i32> for Bound {
    fn from(number: i32) -> Self {
        Bound::Integer(number as i64)
    }
}

impl From<&str> for Bound {
    fn from(text: &str) -> Self {
        Bound::Text(text.to_string())
    }
}

impl From<String> for Bound {
    fn from(text: String) -> Self {
        Bound::Text(text)
    }
}

/// Source form of the emitted file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// FORTRAN 77 fixed form: labels in columns 1-5, continuation marker in
    /// column 6, statements from column 7.
    Fixed,
    /// Fortran 90 free form.
    #[default]
    Free,
}

impl Style {
    pub fn maximum_line_length(&self) -> usize {
        match self {
            Style::Fixed => 72,
            Style::Free => 132,
        }
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" | "f77" => Ok(Style::Fixed),
            "free" | "f90" => Ok(Style::Free),
            _ => Err(format!("unknown source form '{}'", s)),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Fixed => f.write_str("fixed"),
            Style::Free => f.write_str("free"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Native,
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl FromStr for LineEnding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "native" => Ok(LineEnding::Native),
            "lf" | "unix" => Ok(LineEnding::Lf),
            "crlf" | "windows" => Ok(LineEnding::CrLf),
            _ => Err(format!("unknown line ending '{}'", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    #[default]
    #[serde(rename = "utf-8")]
    Utf8,
    #[serde(rename = "latin1")]
    Latin1,
    #[serde(rename = "ascii")]
    Ascii,
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s
            .to_ascii_lowercase()
            .as_str()
        {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" => Ok(Encoding::Latin1),
            "ascii" | "us-ascii" => Ok(Encoding::Ascii),
            _ => Err(format!("unsupported encoding '{}'", s)),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Utf8 => f.write_str("utf-8"),
            Encoding::Latin1 => f.write_str("latin1"),
            Encoding::Ascii => f.write_str("ascii"),
        }
    }
}
