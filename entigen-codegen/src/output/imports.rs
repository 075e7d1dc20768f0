//! Removal of unused named imports from decorator-based artifacts.
//!
//! Entity templates import every TypeORM decorator up front. After rendering,
//! only the decorators the text actually applies are kept. Usage is searched
//! in a masked copy of the text where string literals and comments are
//! blanked out, so `'@Index('` in a string or `// @Column(` in a comment does
//! not keep an import alive.

use std::sync::LazyLock;

use regex::Regex;

static IMPORT_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bimport\s*\{").expect("import pattern is valid"));

/// Base class that is kept when referenced anywhere, not only as a decorator.
const BASE_CLASS: &str = "BaseEntity";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    LineComment,
    BlockComment,
    Quoted(char),
}

/// Copy of `src` with the contents of string literals and comments replaced
/// by spaces.
///
/// Byte offsets are preserved and line breaks are kept, so positions found in
/// the mask index the original text.
pub fn mask_literals(src: &str) -> String {
    scan(src).masked
}

/// The literal or comment `src` leaves open, if any.
///
/// Single and double quoted strings count as open when they reach a line break.
pub fn unterminated(src: &str) -> Option<&'static str> {
    scan(src).open
}

/// For each line of `src`, whether it starts inside a template literal.
pub fn template_lines(src: &str) -> Vec<bool> {
    scan(src).template_lines
}

struct Scan {
    masked: String,
    open: Option<&'static str>,
    template_lines: Vec<bool>,
}

fn scan(src: &str) -> Scan {
    let mut out = String::with_capacity(src.len());
    let mut open = None;
    let mut template_lines = vec![false];
    let mut state = State::Code;
    let mut chars = src.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Code => match c {
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    out.push_str("  ");
                    state = State::LineComment;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    out.push_str("  ");
                    state = State::BlockComment;
                }
                '"' | '\'' | '`' => {
                    out.push(' ');
                    state = State::Quoted(c);
                }
                _ => out.push(c),
            },
            State::LineComment => {
                if c == '\n' {
                    out.push('\n');
                    state = State::Code;
                } else {
                    blank(&mut out, c);
                }
            }
            State::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    out.push_str("  ");
                    state = State::Code;
                } else {
                    blank(&mut out, c);
                }
            }
            State::Quoted(quote) => {
                if c == '\\' {
                    blank(&mut out, c);
                    if let Some(escaped) = chars.next() {
                        blank(&mut out, escaped);
                        if escaped == '\n' {
                            template_lines.push(quote == '`');
                        }
                    }
                } else if c == quote {
                    out.push(' ');
                    state = State::Code;
                } else {
                    if c == '\n' && quote != '`' {
                        open = open.or(Some("string literal"));
                    }
                    blank(&mut out, c);
                }
            }
        }
        if c == '\n' {
            template_lines.push(state == State::Quoted('`'));
        }
    }

    let open = open.or(match state {
        State::BlockComment => Some("block comment"),
        State::Quoted('`') => Some("template literal"),
        State::Quoted(_) => Some("string literal"),
        State::Code | State::LineComment => None,
    });
    Scan {
        masked: out,
        open,
        template_lines,
    }
}

fn blank(out: &mut String, c: char) {
    if c == '\n' {
        out.push('\n');
    } else {
        out.extend(std::iter::repeat_n(' ', c.len_utf8()));
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Whether `word` occurs in `text` as a whole identifier.
fn contains_word(text: &str, word: &str) -> bool {
    text.match_indices(word).any(|(at, _)| {
        let before = text[..at].chars().next_back();
        let after = text[at + word.len()..].chars().next();
        !before.is_some_and(is_ident_char) && !after.is_some_and(is_ident_char)
    })
}

/// Name a specifier binds locally (`A as B` binds `B`).
fn local_name(specifier: &str) -> &str {
    specifier
        .rsplit_once(" as ")
        .map_or(specifier, |(_, local)| local)
        .trim()
}

/// Drop the named imports of the first import statement that the rest of the
/// text never applies as a decorator.
///
/// A name is kept when `@Name(` follows the import, or for `BaseEntity` when
/// the name appears anywhere after it. When no name survives the whole
/// statement is removed together with the whitespace after it.
pub fn prune_imports(text: &str) -> String {
    let masked = mask_literals(text);

    let Some(open_match) = IMPORT_OPEN.find(&masked) else {
        return text.to_string();
    };
    let open = open_match.end() - 1;
    let Some(close) = masked[open..].find('}').map(|at| open + at) else {
        return text.to_string();
    };

    let rest = &masked[close + 1..];
    let specifiers: Vec<&str> = text[open + 1..close]
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let kept: Vec<&str> = specifiers
        .iter()
        .copied()
        .filter(|specifier| {
            let name = local_name(specifier);
            rest.contains(&format!("@{name}("))
                || (name == BASE_CLASS && contains_word(rest, name))
        })
        .collect();

    if kept.len() == specifiers.len() {
        return text.to_string();
    }

    if kept.is_empty() {
        let end = statement_end(&masked, close);
        let mut pruned = String::with_capacity(text.len());
        pruned.push_str(&text[..open_match.start()]);
        pruned.push_str(text[end..].trim_start());
        return pruned;
    }

    let mut pruned = String::with_capacity(text.len());
    pruned.push_str(&text[..open]);
    pruned.push_str("{ ");
    pruned.push_str(&kept.join(", "));
    pruned.push_str(" }");
    pruned.push_str(&text[close + 1..]);
    pruned
}

/// Offset just past the import statement whose named imports close at `close`.
fn statement_end(masked: &str, close: usize) -> usize {
    let after = &masked[close..];
    let line_end = after.find('\n').unwrap_or(after.len());
    match after[..line_end].find(';') {
        Some(semi) => close + semi + 1,
        None => close + line_end,
    }
}
