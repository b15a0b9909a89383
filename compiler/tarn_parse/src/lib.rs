//! Recursive descent parser for Tarn.
//!
//! Turns a [`TokenList`] into statements, one declaration at a time. A
//! declaration that fails to parse is reported, skipped with panic-mode
//! recovery, and left out of the output; the rest of the program still
//! parses.

mod cursor;
mod error;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use error::ParseError;
pub use recovery::{synchronize, TokenSet, BLOCK_RECOVERY, DECLARATION_START};

use tarn_ir::{Name, Span, StringInterner, Stmt, Token, TokenKind, TokenList};

/// Parser state.
///
/// Also an iterator: each call to `next` parses declarations until one
/// succeeds or the tokens run out. Errors accumulate in [`Parser::errors`].
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    errors: Vec<ParseError>,
    /// Nesting depth of function bodies; zero at top level.
    function_depth: u32,
    /// Nesting depth of braced blocks, function bodies included.
    block_depth: u32,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            errors: Vec::new(),
            function_depth: 0,
            block_depth: 0,
        }
    }

    /// Errors reported so far.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consume the parser, returning its errors.
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parse every remaining declaration.
    pub fn parse_program(mut self) -> ParseResult {
        let statements: Vec<Stmt> = self.by_ref().collect();
        tracing::debug!(
            statements = statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        ParseResult {
            statements,
            errors: self.errors,
        }
    }

    // Cursor delegation methods - delegate to the underlying Cursor for token navigation.

    #[inline]
    fn current(&self) -> &'a Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> &'a Token {
        self.cursor.advance()
    }

    #[inline]
    fn expect(&mut self, kind: &TokenKind, message: &str) -> Result<&'a Token, ParseError> {
        self.cursor.expect(kind, message)
    }

    /// Consume the delimiter closing the one at `open`.
    ///
    /// On failure the error also points back at the opening delimiter.
    fn expect_closing(
        &mut self,
        kind: &TokenKind,
        open: Span,
        message: &str,
    ) -> Result<&'a Token, ParseError> {
        let opener = match kind {
            TokenKind::RBrace => "{",
            _ => "(",
        };
        self.cursor
            .expect(kind, message)
            .map_err(|e| e.with_related(open, format!("unclosed `{opener}` opened here")))
    }

    #[inline]
    fn expect_ident(&mut self, message: &str) -> Result<(Name, Span), ParseError> {
        self.cursor.expect_ident(message)
    }

    /// Get access to the string interner.
    #[inline]
    fn interner(&self) -> &'a StringInterner {
        self.cursor.interner()
    }

    /// Record an error that does not interrupt parsing.
    #[cold]
    fn report(&mut self, error: ParseError) {
        self.errors.push(error);
    }
}

impl Iterator for Parser<'_> {
    type Item = Stmt;

    fn next(&mut self) -> Option<Stmt> {
        while !self.is_at_end() {
            if let Some(stmt) = self.parse_declaration() {
                return Some(stmt);
            }
        }
        None
    }
}

/// Parse result containing statements and any errors.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ParseResult {
    pub statements: Vec<Stmt>,
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse tokens into a list of statements.
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> ParseResult {
    let parser = Parser::new(tokens, interner);
    parser.parse_program()
}

#[cfg(test)]
mod tests;
