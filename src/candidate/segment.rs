//! Bracket-aware splitting and arbitrary-payload decoding.
//!
//! Every syntactic character the grammar cares about is ASCII, so the scanners
//! below walk bytes. Slices are only ever taken at ASCII positions, which are
//! always char boundaries.

/// Split `input` on every `delimiter` that sits outside brackets and quotes.
///
/// `\x` suppresses splitting at `x`; the escape stays in the segment text.
/// Returns an empty vector when brackets are unbalanced or mismatched, or a
/// quote is never closed.
pub fn segment(input: &str, delimiter: char) -> Vec<&str> {
    debug_assert!(delimiter.is_ascii(), "delimiters are ASCII");
    let delimiter = delimiter as u8;
    let bytes = input.as_bytes();
    let mut brackets = Brackets::default();
    let mut parts = Vec::new();
    let mut start = 0;

    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        if brackets.is_empty() && byte == delimiter {
            parts.push(&input[start..i]);
            start = i + 1;
            i += 1;
            continue;
        }

        match byte {
            b'\\' => i += 1,
            b'\'' | b'"' => match skip_quoted(bytes, i) {
                Some(end) => i = end,
                None => return Vec::new(),
            },
            b'[' | b'(' | b'{' => brackets.open(byte),
            b']' | b')' | b'}' => {
                if !brackets.close(byte) {
                    return Vec::new();
                }
            }
            _ => {}
        }
        i += 1;
    }

    if !brackets.is_empty() {
        return Vec::new();
    }
    parts.push(&input[start..]);
    parts
}

/// Decode the text between the brackets of an arbitrary value.
///
/// An unescaped `_` becomes a space and `\_` becomes a literal `_`. Inside
/// `url(...)` underscores are kept as written.
pub fn decode_arbitrary_value(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("url(") {
        output.push_str(&convert_underscores(&rest[..start]));
        let end = matching_paren(rest, start + 3).map_or(rest.len(), |close| close + 1);
        output.push_str(&rest[start..end]);
        rest = &rest[end..];
    }

    output.push_str(&convert_underscores(rest));
    output
}

/// Whether a decoded arbitrary payload could sit inside a declaration.
///
/// Brackets must be balanced and properly nested, quotes closed, and no `;`
/// may appear outside of them.
pub fn is_valid_arbitrary(input: &str) -> bool {
    let bytes = input.as_bytes();
    let mut brackets = Brackets::default();

    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        match byte {
            b'\\' => i += 1,
            b'\'' | b'"' => match skip_quoted(bytes, i) {
                Some(end) => i = end,
                None => return false,
            },
            b'[' | b'(' | b'{' => brackets.open(byte),
            b']' | b')' | b'}' => {
                if !brackets.close(byte) {
                    return false;
                }
            }
            b';' if brackets.is_empty() => return false,
            _ => {}
        }
        i += 1;
    }

    brackets.is_empty()
}

/// Index of the first `ch` at the top level of `input`, ignoring escaped
/// occurrences and anything inside brackets or quotes.
pub(super) fn find_top_level(input: &str, ch: u8) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut brackets = Brackets::default();

    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        if brackets.is_empty() && byte == ch {
            return Some(i);
        }
        match byte {
            b'\\' => i += 1,
            b'\'' | b'"' => i = skip_quoted(bytes, i)?,
            b'[' | b'(' | b'{' => brackets.open(byte),
            b']' | b')' | b'}' => {
                if !brackets.close(byte) {
                    return None;
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

fn convert_underscores(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' if chars.peek() == Some(&'_') => {
                output.push('_');
                chars.next();
            }
            '_' => output.push(' '),
            other => output.push(other),
        }
    }
    output
}

/// Position of the `)` closing the `(` at `open`, if any.
pub(super) fn matching_paren(input: &str, open: usize) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Index of the quote closing the one at `open`.
fn skip_quoted(bytes: &[u8], open: usize) -> Option<usize> {
    let quote = bytes[open];
    let mut i = open + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            byte if byte == quote => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// Stack of expected closing brackets.
#[derive(Default)]
struct Brackets {
    closers: Vec<u8>,
}

impl Brackets {
    fn open(&mut self, byte: u8) {
        let closer = match byte {
            b'[' => b']',
            b'(' => b')',
            _ => b'}',
        };
        self.closers.push(closer);
    }

    /// Pops the innermost span; `false` when `byte` does not close it.
    fn close(&mut self, byte: u8) -> bool {
        self.closers.pop() == Some(byte)
    }

    fn is_empty(&self) -> bool {
        self.closers.is_empty()
    }
}
