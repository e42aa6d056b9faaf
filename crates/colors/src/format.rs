//! Deterministic SCSS layout pass applied to every generated document.
//!
//! The formatter only understands as much SCSS as the generator emits:
//! nesting through `{}` and `()`, quoted strings, and `//` comments. It
//! re-indents by nesting depth, normalizes blank lines and quotes, and breaks
//! over-wide parenthesized lists into one item per line. Passes repeat until
//! the text stops changing, so formatting formatted output is a no-op.

const INDENT: &str = "  ";
const MAX_PASSES: usize = 16;

/// Style applied by [`format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Lines wider than this, indentation included, are reflowed when they
    /// contain a list that can be broken.
    pub print_width: usize,
    /// Rewrite `"double"` strings as `'single'` when that needs no escaping.
    pub single_quote: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            print_width: 80,
            single_quote: true,
        }
    }
}

/// Formats `source`. Non-empty output ends with a single newline.
#[must_use]
pub fn format(source: &str, options: &FormatOptions) -> String {
    let mut current = source.to_owned();
    for _ in 0..MAX_PASSES {
        let next = pass(&current, options);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn pass(source: &str, options: &FormatOptions) -> String {
    let lines: Vec<String> = source
        .lines()
        .map(|line| {
            let line = line.trim();
            if options.single_quote {
                prefer_single_quotes(line)
            } else {
                line.to_owned()
            }
        })
        .collect();

    let mut out = String::with_capacity(source.len());
    let mut depth = 0usize;
    for line in collapse_blank_lines(&lines) {
        if line.is_empty() {
            out.push('\n');
            continue;
        }

        let shape = Shape::scan(line);
        let indent = depth.saturating_sub(shape.leading_closers);
        let width = indent * INDENT.len() + line.chars().count();
        let pieces = if width > options.print_width {
            break_list(line)
        } else {
            None
        };

        match pieces {
            Some(pieces) => {
                for piece in &pieces {
                    push_line(&mut out, indent, piece);
                }
            }
            None => push_line(&mut out, indent, line),
        }
        depth = (depth + shape.opens).saturating_sub(shape.closes);
    }
    out
}

fn push_line(out: &mut String, indent: usize, line: &str) {
    for _ in 0..indent {
        out.push_str(INDENT);
    }
    out.push_str(line);
    out.push('\n');
}

/// Keeps at most one blank line in a row, and none at the edges of the
/// document or of a block.
fn collapse_blank_lines(lines: &[String]) -> Vec<&str> {
    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        if line.is_empty() {
            let after_opener = kept
                .last()
                .map_or(true, |prev| prev.is_empty() || Shape::scan(prev).trailing_opener);
            let before_closer = lines[index + 1..]
                .iter()
                .find(|next| !next.is_empty())
                .map_or(true, |next| Shape::scan(next).leading_closers > 0);
            if after_opener || before_closer {
                continue;
            }
        }
        kept.push(line);
    }
    kept
}

/// Bracket structure of one line, ignoring strings and comments.
#[derive(Debug, Default, PartialEq, Eq)]
struct Shape {
    opens: usize,
    closes: usize,
    leading_closers: usize,
    trailing_opener: bool,
}

impl Shape {
    fn scan(line: &str) -> Self {
        let mut shape = Self::default();
        let mut seen_other = false;
        let mut last = None;
        let mut quote: Option<char> = None;
        let mut chars = line.chars().peekable();

        while let Some(ch) = chars.next() {
            if let Some(open) = quote {
                if ch == '\\' {
                    chars.next();
                } else if ch == open {
                    quote = None;
                }
                last = Some(ch);
                continue;
            }
            match ch {
                '/' if chars.peek() == Some(&'/') => break,
                '"' | '\'' => quote = Some(ch),
                '{' | '(' => shape.opens += 1,
                '}' | ')' => {
                    shape.closes += 1;
                    if !seen_other {
                        shape.leading_closers += 1;
                    }
                }
                _ => {}
            }
            if ch.is_whitespace() {
                continue;
            }
            if !matches!(ch, '}' | ')') {
                seen_other = true;
            }
            last = Some(ch);
        }

        shape.trailing_opener = matches!(last, Some('{' | '('));
        shape
    }
}

fn prefer_single_quotes(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(index) = rest.find(['"', '\'', '/']) {
        let (head, tail) = rest.split_at(index);
        out.push_str(head);

        if tail.starts_with("//") {
            out.push_str(tail);
            return out;
        }
        if tail.starts_with('/') {
            out.push('/');
            rest = &tail[1..];
            continue;
        }

        let quote = if tail.starts_with('"') { '"' } else { '\'' };
        let Some(end) = closing_quote(&tail[1..], quote) else {
            out.push_str(tail);
            return out;
        };
        let content = &tail[1..=end];
        if quote == '"' && !content.contains(['\'', '\\']) {
            out.push('\'');
            out.push_str(content);
            out.push('\'');
        } else {
            out.push_str(&tail[..=end + 1]);
        }
        rest = &tail[end + 2..];
    }

    out.push_str(rest);
    out
}

/// Byte offset of the unescaped `quote` that ends `body`.
fn closing_quote(body: &str, quote: char) -> Option<usize> {
    let mut escaped = false;
    for (index, ch) in body.char_indices() {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == quote {
            return Some(index);
        }
    }
    None
}

/// Splits the first non-empty top-level map literal into one item per line,
/// each followed by a comma.
fn break_list(line: &str) -> Option<Vec<String>> {
    let mut depth = 0usize;
    let mut open_at = None;
    let mut commas = Vec::new();
    let mut quote: Option<char> = None;
    let mut chars = line.char_indices().peekable();

    while let Some((index, ch)) = chars.next() {
        if let Some(open) = quote {
            if ch == '\\' {
                chars.next();
            } else if ch == open {
                quote = None;
            }
            continue;
        }
        match ch {
            '/' if chars.peek().map(|(_, next)| *next) == Some('/') => return None,
            '"' | '\'' => quote = Some(ch),
            '(' | '{' => {
                if depth == 0 && ch == '(' && opens_map(&line[..index]) {
                    open_at = Some(index);
                    commas.clear();
                }
                depth += 1;
            }
            ',' if depth == 1 && open_at.is_some() => commas.push(index),
            ')' | '}' => {
                depth = depth.saturating_sub(1);
                if depth != 0 {
                    continue;
                }
                let Some(open) = open_at.take() else {
                    continue;
                };
                if ch != ')' {
                    continue;
                }
                let items = split_items(line, open, index, &commas);
                if items.is_empty() {
                    continue;
                }
                let mut pieces = Vec::with_capacity(items.len() + 2);
                pieces.push(line[..=open].trim_end().to_owned());
                pieces.extend(items.into_iter().map(|item| format!("{item},")));
                pieces.push(line[index..].trim().to_owned());
                return Some(pieces);
            }
            _ => {}
        }
    }
    None
}

/// A map or list literal opens a line or follows a `key:`; anything else,
/// like `rgba(`, is a function call whose arguments stay on one line.
fn opens_map(head: &str) -> bool {
    let head = head.trim_end();
    head.is_empty() || head.ends_with(':')
}

fn split_items<'a>(line: &'a str, open: usize, close: usize, commas: &[usize]) -> Vec<&'a str> {
    let mut bounds = Vec::with_capacity(commas.len() + 2);
    bounds.push(open);
    bounds.extend_from_slice(commas);
    bounds.push(close);
    bounds
        .windows(2)
        .map(|pair| line[pair[0] + 1..pair[1]].trim())
        .filter(|item| !item.is_empty())
        .collect()
}
