//! Panic-mode recovery: after a failed declaration, skip to a point where
//! parsing can resume.

use tarn_ir::TokenKind;

use super::cursor::Cursor;

/// Token kinds, one bit per `TokenKind::discriminant_index`. Payloads are
/// ignored, so `Ident(_)` is a single member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    #[allow(clippy::needless_pass_by_value)] // const context
    pub const fn single(kind: TokenKind) -> Self {
        Self(1u64 << kind.discriminant_index())
    }

    #[inline]
    #[must_use]
    #[allow(clippy::needless_pass_by_value)] // const context
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.discriminant_index()))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(&self, kind: &TokenKind) -> bool {
        (self.0 & (1u64 << kind.discriminant_index())) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Keywords that begin a declaration or statement.
///
/// Recovery stops in front of these so the next declaration parses cleanly.
pub const DECLARATION_START: TokenSet = TokenSet::new()
    .with(TokenKind::Class)
    .with(TokenKind::Fun)
    .with(TokenKind::Var)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Print)
    .with(TokenKind::Return);

/// Recovery set inside a block: the closing brace also ends the damage.
pub const BLOCK_RECOVERY: TokenSet = DECLARATION_START.union(TokenSet::single(TokenKind::RBrace));

/// Discard tokens after a failed declaration that began at `start`.
///
/// Stops after consuming a `;`, before a token in `recovery`, or at EOF.
/// If the failure happened on the declaration's first token, that token is
/// consumed first so the caller always makes progress.
///
/// Returns `true` if a recovery point was found, `false` if EOF was reached.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet, start: usize) -> bool {
    if cursor.position() == start && !cursor.is_at_end() {
        let skipped = cursor.advance();
        if matches!(skipped.kind, TokenKind::Semicolon) {
            return true;
        }
    }

    while !cursor.is_at_end() {
        if recovery.contains(&cursor.current_kind()) {
            return true;
        }
        if matches!(cursor.advance().kind, TokenKind::Semicolon) {
            return true;
        }
    }
    false
}
