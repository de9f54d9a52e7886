//! Cursor over an IQL string
//!
//! The walker knows about bracket depth and quoted regions, so a `(`, `|` or
//! `&` inside `"..."` or `'...'` never ends a group. Positions are byte
//! offsets and always sit on a char boundary.

/// Cursor over an IQL string
#[derive(Debug, Clone)]
pub struct Walker<'a> {
    input: &'a str,
    pos: usize,
}

fn closing_for(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        _ => None,
    }
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

impl<'a> Walker<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Move forward by `n` chars, stopping at the end. Returns how many were skipped.
    pub fn advance(&mut self, n: usize) -> usize {
        let mut skipped = 0;
        for c in self.remaining().chars().take(n) {
            self.pos += c.len_utf8();
            skipped += 1;
        }
        skipped
    }

    /// Skip a quoted region starting at the cursor, including both quotes.
    /// An unterminated quote runs to the end of the input.
    fn skip_quoted(&mut self) {
        let Some(quote) = self.peek() else { return };
        self.advance(1);
        match self.remaining().find(quote) {
            Some(offset) => self.pos += offset + quote.len_utf8(),
            None => self.pos = self.input.len(),
        }
    }

    /// Move to the next `target` outside quoted regions.
    ///
    /// Returns false (with the cursor at the end) when there is none.
    pub fn advance_to(&mut self, target: char) -> bool {
        while let Some(c) = self.peek() {
            if c == target {
                return true;
            }
            if is_quote(c) {
                self.skip_quoted();
            } else {
                self.advance(1);
            }
        }
        false
    }

    /// Read the contents of the bracket pair opening at the cursor.
    ///
    /// Supports `(...)` and `[...]`; nested pairs of the same kind are
    /// counted so an inner close does not end the outer read. The cursor ends
    /// up after the matching close. An unbalanced pair yields everything up to
    /// the end of the input. Returns `None` if the cursor is not on an opener.
    pub fn read_enclosed(&mut self) -> Option<&'a str> {
        let open = self.peek()?;
        let close = closing_for(open)?;
        self.advance(1);
        let start = self.pos;
        let mut depth = 1usize;

        while let Some(c) = self.peek() {
            if is_quote(c) {
                self.skip_quoted();
                continue;
            }
            if c == open {
                depth += 1;
            } else if c == close {
                depth -= 1;
                if depth == 0 {
                    let content = &self.input[start..self.pos];
                    self.advance(1);
                    return Some(content);
                }
            }
            self.advance(1);
        }

        log::debug!("Unbalanced '{}' at offset {}", open, start - open.len_utf8());
        Some(&self.input[start..])
    }
}

/// Split `input` on `separator` wherever it appears outside brackets and quotes
pub fn split_top_level(input: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut walker = Walker::new(input);
    let mut start = 0;
    let mut depth = 0usize;

    while let Some(c) = walker.peek() {
        if is_quote(c) {
            walker.skip_quoted();
            continue;
        }
        if closing_for(c).is_some() {
            depth += 1;
        } else if c == ')' || c == ']' {
            depth = depth.saturating_sub(1);
        } else if c == separator && depth == 0 {
            parts.push(&input[start..walker.position()]);
            start = walker.position() + c.len_utf8();
        }
        walker.advance(1);
    }
    parts.push(&input[start..]);
    parts
}

/// True when byte offset `pos` falls inside a quoted region (or on its quotes)
pub fn is_quoted_at(input: &str, pos: usize) -> bool {
    let mut walker = Walker::new(input);
    while let Some(c) = walker.peek() {
        let start = walker.position();
        if start >= pos {
            return false;
        }
        if is_quote(c) {
            walker.skip_quoted();
            if pos < walker.position() {
                return true;
            }
        } else {
            walker.advance(1);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance() {
        let mut walker = Walker::new("abé d");
        assert_eq!(walker.advance(3), 3);
        assert_eq!(walker.peek(), Some(' '));
        assert_eq!(walker.advance(10), 2);
        assert!(walker.is_done());
    }

    #[test]
    fn test_advance_to_skips_quotes() {
        let mut walker = Walker::new(r#"'a(b'="x(y"&('c'=1)"#);
        assert!(walker.advance_to('('));
        assert_eq!(walker.remaining(), "('c'=1)");

        let mut walker = Walker::new("'a'=1");
        assert!(!walker.advance_to('('));
        assert!(walker.is_done());
    }

    #[test]
    fn test_read_enclosed_nested() {
        let mut walker = Walker::new("(('a'=1)|('b'=2))|('c'=3)");
        assert_eq!(walker.read_enclosed(), Some("('a'=1)|('b'=2)"));
        assert_eq!(walker.remaining(), "|('c'=3)");
    }

    #[test]
    fn test_read_enclosed_ignores_quoted_brackets() {
        let mut walker = Walker::new(r#"('a'=")"&'b'=1)"#);
        assert_eq!(walker.read_enclosed(), Some(r#"'a'=")"&'b'=1"#));
        assert!(walker.is_done());
    }

    #[test]
    fn test_read_enclosed_square_brackets() {
        let mut walker = Walker::new("[1,[2,3]],4");
        assert_eq!(walker.read_enclosed(), Some("1,[2,3]"));
        assert_eq!(walker.remaining(), ",4");
    }

    #[test]
    fn test_read_enclosed_unbalanced_and_non_opener() {
        let mut walker = Walker::new("('a'=1");
        assert_eq!(walker.read_enclosed(), Some("'a'=1"));

        let mut walker = Walker::new("'a'=1");
        assert_eq!(walker.read_enclosed(), None);
        assert_eq!(walker.position(), 0);
    }

    #[test]
    fn test_split_top_level() {
        assert_eq!(
            split_top_level(r#"'a'="x&y"&'b'=2"#, '&'),
            vec![r#"'a'="x&y""#, "'b'=2"]
        );
        assert_eq!(split_top_level("(a|b)|c", '|'), vec!["(a|b)", "c"]);
        assert_eq!(split_top_level("abc", '|'), vec!["abc"]);
    }

    #[test]
    fn test_is_quoted_at() {
        let input = r#"'a=b'="c""#;
        assert!(is_quoted_at(input, 2));
        assert!(!is_quoted_at(input, 5));
        assert!(is_quoted_at(input, 7));
    }
}
