//! Error codes for all Tarn diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the phase that reported it.

use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Runtime / eval errors
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unexpected character in source
    E0002,
    /// Source larger than a span can address
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected token (missing terminator or bracket)
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Invalid assignment target
    E1005,
    /// Too many parameters
    E1006,
    /// Too many arguments
    E1007,
    /// Duplicate parameter name
    E1008,
    /// `return` outside of a function body
    E1009,

    // Runtime Errors (E6xxx)
    /// Undefined identifier
    E6001,
    /// Operand type mismatch
    E6002,
    /// Division by zero
    E6003,
    /// Callee is not callable
    E6004,
    /// Wrong number of arguments
    E6005,
    /// Call depth limit exceeded
    E6006,
    /// Native function failure
    E6007,

    // Internal Errors (E9xxx)
    /// Interpreter invariant violated
    E9001,
}

impl ErrorCode {
    /// All error codes, in declaration order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
        ErrorCode::E6006,
        ErrorCode::E6007,
        ErrorCode::E9001,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// The phase that reports this code, read off its first digit.
    pub fn phase(self) -> Phase {
        match self.as_str().as_bytes().get(1) {
            Some(b'0') => Phase::Lexer,
            Some(b'1') => Phase::Parser,
            Some(b'6') => Phase::Runtime,
            _ => Phase::Internal,
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.phase() == Phase::Lexer
    }

    pub fn is_parser_error(&self) -> bool {
        self.phase() == Phase::Parser
    }

    pub fn is_eval_error(&self) -> bool {
        self.phase() == Phase::Runtime
    }

    pub fn is_internal_error(&self) -> bool {
        self.phase() == Phase::Internal
    }

    /// Check if this code is reported before any code runs.
    pub fn is_compile_error(&self) -> bool {
        matches!(self.phase(), Phase::Lexer | Phase::Parser)
    }
}

/// Which part of the pipeline an [`ErrorCode`] comes from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Phase {
    Lexer,
    Parser,
    Runtime,
    /// A broken interpreter invariant rather than a problem in the program.
    Internal,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or(())
    }
}
