//! Renderers for colourizing generated Fortran

use owo_colors::OwoColorize;

use super::{Render, Syntax};

/// Embellish fragments with ANSI escapes to create syntax highlighting in
/// terminal output.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Neutral => content.to_string(),
            Syntax::Indent => content.to_string(),
            Syntax::Newline => "\n".to_string(),
            Syntax::Label => content // variable.other - #60989a (teal) bold
                .color(owo_colors::Rgb(0x60, 0x98, 0x9a))
                .bold()
                .to_string(),
            Syntax::Continuation => content // punctuation - #999999 (grey)
                .color(owo_colors::Rgb(0x99, 0x99, 0x99))
                .bold()
                .to_string(),
            Syntax::Comment => content // comment - #75507b (purple)
                .color(owo_colors::Rgb(0x75, 0x50, 0x7b))
                .italic()
                .to_string(),
            Syntax::Keyword => content // keyword.control - #3465a4 (blue) bold
                .color(owo_colors::Rgb(0x34, 0x65, 0xa4))
                .bold()
                .to_string(),
            Syntax::Declaration => content // storage.type - #8f5902 (brown) bold
                .color(owo_colors::Rgb(0x8f, 0x59, 0x02))
                .bold()
                .to_string(),
            Syntax::String => content // string - #4e9a06 (green) bold
                .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                .bold()
                .to_string(),
            Syntax::Numeric => content // constant.numeric - #ad7fa8 (purple) bold
                .color(owo_colors::Rgb(0xad, 0x7f, 0xa8))
                .bold()
                .to_string(),
            Syntax::Operator => content // keyword.operator - #cc0000 (red) bold
                .color(owo_colors::Rgb(204, 0, 0))
                .bold()
                .to_string(),
            Syntax::Structure => content
                .color(owo_colors::Rgb(153, 153, 153))
                .bold()
                .to_string(),
        }
    }
}
