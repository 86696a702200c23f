//! Line classification and the two processing modes.

use std::io::Write;

use anyhow::Result;

use crate::escape::html_encode;
use crate::quote::{shell_quote, shell_unquote};
use crate::request::RequestParams;

/// One input line (trailing newline already stripped), classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLine<'a> {
    /// `# ...`; the text is the remainder after `#` and any following spaces.
    Comment(&'a str),
    /// `key=value`, split at the first `=`.
    Assignment { key: &'a str, value: &'a str },
    /// Anything else: blank lines, separators, free-form text.
    Other(&'a str),
}

impl<'a> ConfigLine<'a> {
    pub fn classify(line: &'a str) -> Self {
        if let Some(rest) = line.strip_prefix('#') {
            return ConfigLine::Comment(rest.trim_start_matches(' '));
        }
        if let Some(idx) = line.find('=') {
            return ConfigLine::Assignment {
                key: &line[..idx],
                value: &line[idx + 1..],
            };
        }
        ConfigLine::Other(line)
    }
}

/// Render-mode driver: turns a config file into an HTML form fragment.
///
/// Comment text accumulates (space-joined) until an assignment flushes it as
/// the paragraph preceding that field's `<input>`. A non-assignment line
/// flushes pending comments as a free-standing paragraph. Call [`finish`]
/// after the last line so trailing comments still render.
///
/// The accumulator is empty immediately after any flush.
///
/// [`finish`]: FormRenderer::finish
#[derive(Debug, Default)]
pub struct FormRenderer {
    comments: String,
}

impl FormRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<()> {
        match ConfigLine::classify(line) {
            ConfigLine::Comment(text) => {
                // An empty comment line marks a paragraph break.
                let fragment = if text.is_empty() { "<br />\n" } else { text };
                if !self.comments.is_empty() {
                    self.comments.push(' ');
                }
                self.comments.push_str(fragment);
            }
            ConfigLine::Assignment { key, value } => {
                let encoded = html_encode(&shell_unquote(value));
                writeln!(
                    out,
                    "<p>{}\n<br />{key}&nbsp;<input type='input' name='{key}' value='{encoded}'></p>",
                    self.comments
                )?;
                self.comments.clear();
            }
            ConfigLine::Other(_) => {
                if !self.comments.is_empty() {
                    writeln!(out, "<p>{}</p>", self.comments)?;
                    self.comments.clear();
                }
            }
        }
        Ok(())
    }

    /// Feed one final empty line, flushing any trailing comment paragraph.
    pub fn finish<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.push_line("", out)
    }
}

/// The outcome of rewriting one line in request mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite<'a> {
    /// Comment or free-form line, echoed verbatim.
    Echo(&'a str),
    /// Assignment; `overridden` is true when the request supplied the value.
    Assign {
        key: &'a str,
        value: String,
        overridden: bool,
    },
}

/// Rewrite one config line against the decoded request parameters.
///
/// Assignments take the request's decoded value when the key is present,
/// otherwise the config's own value (unquoted). Everything else echoes.
pub fn rewrite_line<'a>(line: &'a str, params: &RequestParams) -> Rewrite<'a> {
    match ConfigLine::classify(line) {
        ConfigLine::Assignment { key, value } => match params.get(key) {
            Some(new) => Rewrite::Assign {
                key,
                value: new.to_string(),
                overridden: true,
            },
            None => Rewrite::Assign {
                key,
                value: shell_unquote(value),
                overridden: false,
            },
        },
        _ => Rewrite::Echo(line),
    }
}

impl Rewrite<'_> {
    /// The rewritten configuration line, shell-quoted where necessary.
    pub fn to_line(&self) -> String {
        match self {
            Rewrite::Echo(line) => (*line).to_string(),
            Rewrite::Assign { key, value, .. } => format!("{key}={}", shell_quote(value)),
        }
    }
}
