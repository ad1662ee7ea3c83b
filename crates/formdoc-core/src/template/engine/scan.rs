//! Token recognition for the substitution passes
//!
//! Each pass looks for exactly one `{{...}}` form. A recognizer is handed the
//! text starting at a `{{` and either matches its whole form, returning the
//! token and its byte length, or declines.
//!
//! # Grammar
//!
//! ```text
//! ident      = [A-Za-z0-9_-]+
//! if-open    = "{{" ws* "#if:" ident "|" ident ws* "}}"
//! if-close   = "{{" ws* "/if" ws* "}}"
//! check      = "{{" ws* "#check:" ident ws* "}}"
//! radio      = "{{" ws* "#radio:" ident "|" ident ws* "}}"
//! rows       = "{{" ws* "parcelas_rows" ws* "}}"
//! placeholder= "{{" ws* ident ws* "}}"
//! ```

/// A recognized token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind<'a> {
    /// `{{#if:key|value}}`
    IfOpen { key: &'a str, value: &'a str },

    /// `{{/if}}`
    IfClose,

    /// `{{#check:key}}`
    Check { key: &'a str },

    /// `{{#radio:group|value}}`
    Radio { group: &'a str, value: &'a str },

    /// `{{parcelas_rows}}`
    Rows,

    /// `{{key}}`
    Placeholder { key: &'a str },
}

/// A token and the number of bytes it spans, braces included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub length: usize,
}

/// Signature shared by all recognizers
pub(crate) type Recognizer = for<'a> fn(&'a str) -> Option<Token<'a>>;

/// Forward-only cursor over one candidate token
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn eat(&mut self, literal: &str) -> Option<()> {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            Some(())
        } else {
            None
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn ident(&mut self) -> Option<&'a str> {
        let rest = self.rest();
        let len = rest.bytes().take_while(|b| is_ident_byte(*b)).count();
        if len == 0 {
            return None;
        }
        self.pos += len;
        Some(&rest[..len])
    }

    fn open(&mut self) -> Option<()> {
        self.eat("{{")?;
        self.skip_whitespace();
        Some(())
    }

    fn close(&mut self) -> Option<()> {
        self.skip_whitespace();
        self.eat("}}")
    }

    fn finish(self, kind: TokenKind<'a>) -> Option<Token<'a>> {
        Some(Token {
            kind,
            length: self.pos,
        })
    }
}

/// Word characters and hyphens
fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-'
}

pub(crate) fn if_open(text: &str) -> Option<Token<'_>> {
    let mut c = Cursor::new(text);
    c.open()?;
    c.eat("#if:")?;
    let key = c.ident()?;
    c.eat("|")?;
    let value = c.ident()?;
    c.close()?;
    c.finish(TokenKind::IfOpen { key, value })
}

pub(crate) fn if_close(text: &str) -> Option<Token<'_>> {
    let mut c = Cursor::new(text);
    c.open()?;
    c.eat("/if")?;
    c.close()?;
    c.finish(TokenKind::IfClose)
}

pub(crate) fn check(text: &str) -> Option<Token<'_>> {
    let mut c = Cursor::new(text);
    c.open()?;
    c.eat("#check:")?;
    let key = c.ident()?;
    c.close()?;
    c.finish(TokenKind::Check { key })
}

pub(crate) fn radio(text: &str) -> Option<Token<'_>> {
    let mut c = Cursor::new(text);
    c.open()?;
    c.eat("#radio:")?;
    let group = c.ident()?;
    c.eat("|")?;
    let value = c.ident()?;
    c.close()?;
    c.finish(TokenKind::Radio { group, value })
}

pub(crate) fn rows(text: &str) -> Option<Token<'_>> {
    let mut c = Cursor::new(text);
    c.open()?;
    c.eat("parcelas_rows")?;
    c.close()?;
    c.finish(TokenKind::Rows)
}

pub(crate) fn placeholder(text: &str) -> Option<Token<'_>> {
    let mut c = Cursor::new(text);
    c.open()?;
    let key = c.ident()?;
    c.close()?;
    c.finish(TokenKind::Placeholder { key })
}

/// Byte offsets of every `{{` in `text`, left to right
///
/// Overlapping starts are reported too (`{{{` yields 0 and 1), so a
/// recognizer that declines at one brace gets a chance at the next.
pub(crate) fn brace_starts(text: &str) -> impl Iterator<Item = usize> + '_ {
    text.as_bytes()
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| *pair == b"{{")
        .map(|(i, _)| i)
}

/// Find the first `{{/if}}` in `text`
///
/// Returns the offset where it starts and its length.
pub(crate) fn find_if_close(text: &str) -> Option<(usize, usize)> {
    brace_starts(text).find_map(|at| if_close(&text[at..]).map(|token| (at, token.length)))
}
