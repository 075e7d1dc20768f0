//! A dependency-free formatter for generated TypeScript and JSON.
//!
//! Source text is re-indented by bracket depth. This is enough for template
//! output, which is already laid out line by line; projects wanting full
//! pretty-printing configure `format.command` instead.

use entigen_codegen::output::{
    FormatError, FormatProfile, Formatter, mask_literals, template_lines, unterminated,
};

/// Re-indents TypeScript and pretty-prints JSON.
///
/// Blank lines are collapsed to one and dropped at the start of the file,
/// after an opening bracket and before a closing one. Lines that start inside
/// a template literal are kept as they are. The line terminator of the input
/// is kept.
#[derive(Debug, Clone, Copy)]
pub struct TypeScriptFormatter {
    indent: usize,
}

impl TypeScriptFormatter {
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    fn source(&self, text: &str) -> Result<String, FormatError> {
        if let Some(what) = unterminated(text) {
            return Err(FormatError::Unterminated(what));
        }

        let masked = mask_literals(text);
        let in_template = template_lines(text);
        let mut out = String::with_capacity(text.len());
        let mut open: Vec<(char, usize)> = Vec::new();
        let mut pending_blank = false;
        let mut after_opener = true;

        for (index, (line, mask)) in text.split('\n').zip(masked.split('\n')).enumerate() {
            let number = index + 1;
            if in_template.get(index).copied().unwrap_or(false) {
                out.push_str(line);
                out.push('\n');
                pending_blank = false;
                track(&mut open, mask, number)?;
                after_opener = mask.trim_end().ends_with(['{', '(', '[']);
                continue;
            }

            let start = line.len() - line.trim_start().len();
            let end = line.trim_end().len();
            if start >= end {
                pending_blank = !after_opener;
                continue;
            }

            let code = &mask[start..end];
            let closers = code
                .chars()
                .take_while(|c| matches!(c, '}' | ')' | ']'))
                .count();

            if pending_blank && closers == 0 {
                out.push('\n');
            }
            pending_blank = false;

            let mut level = open.len().saturating_sub(closers);
            if code.starts_with('.') && !code.starts_with("...") {
                level += 1;
            }
            out.extend(std::iter::repeat_n(' ', level * self.indent));
            // Continuation lines of a block comment keep their leading space.
            if code.trim().is_empty() && line[start..].starts_with('*') {
                out.push(' ');
            }
            out.push_str(&line[start..end]);
            out.push('\n');

            track(&mut open, code, number)?;
            after_opener = code.trim_end().ends_with(['{', '(', '[']);
        }

        if let Some(&(delimiter, line)) = open.last() {
            return Err(FormatError::Unbalanced { delimiter, line });
        }

        Ok(out)
    }
}

impl Default for TypeScriptFormatter {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Pushes the openers of `code` and pops them at their closers.
fn track(open: &mut Vec<(char, usize)>, code: &str, line: usize) -> Result<(), FormatError> {
    for c in code.chars() {
        match c {
            '{' | '(' | '[' => open.push((c, line)),
            '}' | ')' | ']' => match open.pop() {
                Some((opener, _)) if closes(opener, c) => {}
                _ => return Err(FormatError::Unbalanced { delimiter: c, line }),
            },
            _ => {}
        }
    }
    Ok(())
}

fn closes(opener: char, closer: char) -> bool {
    matches!((opener, closer), ('{', '}') | ('(', ')') | ('[', ']'))
}

fn data(text: &str) -> Result<String, FormatError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let mut out = serde_json::to_string_pretty(&value)?;
    out.push('\n');
    Ok(out)
}

impl Formatter for TypeScriptFormatter {
    fn format(&self, text: &str, profile: FormatProfile) -> Result<String, FormatError> {
        let crlf = text.contains("\r\n");
        let text = text.replace("\r\n", "\n");
        let formatted = match profile {
            FormatProfile::Source => self.source(&text)?,
            FormatProfile::Data => data(&text)?,
        };
        Ok(if crlf {
            formatted.replace('\n', "\r\n")
        } else {
            formatted
        })
    }
}
