//! Writing generated source to disk

use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tinytemplate::TinyTemplate;
use tracing::{debug, info};

use crate::formatting;
use crate::language::{Encoding, Fragment, GenerationError, LineEnding, Style};

mod layout;

pub use layout::layout;

static BANNER: &'static str = r#"generated by macrofor {version} from {source}
source form: {style}"#;

#[derive(Serialize)]
struct Context {
    version: &'static str,
    source: String,
    style: String,
}

/// Options controlling how fragments are laid out and written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emission {
    pub style: Style,
    pub line_ending: LineEnding,
    pub encoding: Encoding,
    /// Columns available before a statement is continued onto the next
    /// line; when absent, the usual limit for the source form.
    pub max_line_length: Option<usize>,
    /// Name of whatever the code was generated from. When present a comment
    /// header saying so is written at the top of the file.
    pub banner: Option<String>,
}

impl Default for Emission {
    fn default() -> Self {
        Emission {
            style: Style::Free,
            line_ending: LineEnding::Native,
            encoding: Encoding::Utf8,
            max_line_length: None,
            banner: None,
        }
    }
}

impl Emission {
    pub fn limit(&self) -> usize {
        self.max_line_length
            .unwrap_or(
                self.style
                    .maximum_line_length(),
            )
    }
}

/// Render fragments to the complete text of a source file: every line
/// terminated by the selected line ending.
pub fn render(fragments: &[Fragment], emission: &Emission) -> Result<String, GenerationError> {
    let mut all = Vec::with_capacity(fragments.len() + 1);

    if let Some(source) = &emission.banner {
        all.push(banner(source, emission.style)?);
    }
    all.extend(
        fragments
            .iter()
            .cloned(),
    );

    let ending = emission
        .line_ending
        .as_str();

    let mut result = String::new();
    for line in layout(&all, emission) {
        result.push_str(&line);
        result.push_str(ending);
    }

    Ok(result)
}

fn banner(source: &str, style: Style) -> Result<Fragment, GenerationError> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("banner", BANNER)
        .map_err(|error| GenerationError::invalid("Invalid banner template", error.to_string()))?;

    let context = Context {
        version: env!("CARGO_PKG_VERSION"),
        source: source.to_string(),
        style: style.to_string(),
    };

    let rendered = tt
        .render("banner", &context)
        .map_err(|error| GenerationError::invalid("Unable to render banner", error.to_string()))?;

    let mut lines = Vec::new();
    for line in rendered.lines() {
        lines.push(formatting::comment(line)?);
    }
    Ok(Fragment::from(lines.join("\n")))
}

/// Convert text to bytes in the requested encoding.
pub fn encode(text: &str, encoding: Encoding) -> Result<Vec<u8>, GenerationError> {
    match encoding {
        Encoding::Utf8 => Ok(text
            .as_bytes()
            .to_vec()),
        Encoding::Latin1 | Encoding::Ascii => {
            let mut bytes = Vec::with_capacity(text.len());
            for c in text.chars() {
                let byte = match u8::try_from(c) {
                    Ok(byte) if encoding == Encoding::Latin1 || byte.is_ascii() => byte,
                    _ => {
                        return Err(GenerationError::invalid(
                            "Unrepresentable character",
                            format!("'{}' cannot be written as {}", c, encoding),
                        ))
                    }
                };
                bytes.push(byte);
            }
            Ok(bytes)
        }
    }
}

/// Write fragments to the given file, creating any missing parent
/// directories first. The file is closed on every path out of here.
pub fn emit(filename: &Path, fragments: &[Fragment], emission: &Emission) -> Result<(), GenerationError> {
    info!("Writing file: {}", filename.display());

    let text = render(fragments, emission)?;
    let bytes = encode(&text, emission.encoding)?;

    if let Some(parent) = filename.parent() {
        if !parent
            .as_os_str()
            .is_empty()
            && !parent.exists()
        {
            debug!("Creating directory: {}", parent.display());
            fs::create_dir_all(parent)
                .map_err(|error| GenerationError::filesystem("Unable to create directory", &error, parent))?;
        }
    }

    let mut file = File::create(filename)
        .map_err(|error| GenerationError::filesystem("Unable to create", &error, filename))?;

    file.write_all(&bytes)
        .map_err(|error| GenerationError::filesystem("Failed writing", &error, filename))?;

    debug!("Wrote {} bytes", bytes.len());

    Ok(())
}
