// ABOUTME: Error types for evaluation failures in the Liz interpreter

use crate::value::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum LizError {
    /// Fixed-arity builtin called with the wrong number of arguments
    #[error("Function '{function}' passed incorrect number of arguments. Got {got}, Expected {expected}.")]
    Arity {
        function: &'static str,
        got: usize,
        expected: usize,
    },

    /// Argument of the wrong type, reported with its position
    #[error("Function '{function}' passed incorrect type for argument {position}. Got {got}, Expected {expected}.")]
    Type {
        function: &'static str,
        position: usize,
        got: &'static str,
        expected: &'static str,
    },

    /// Empty Q-expression where a non-empty one is required
    #[error("Function '{function}' passed {{}} for argument {position}.")]
    EmptyList {
        function: &'static str,
        position: usize,
    },

    #[error("Unbound Symbol '{0}'")]
    UnboundSymbol(String),

    /// Head of an S-expression reduction is not callable
    #[error("S-Expression starts with incorrect type. Got {got}, Expected Function.")]
    NotAFunction { got: &'static str },

    #[error("Cannot operate on non-number!")]
    NonNumber,

    #[error("Division By Zero!")]
    DivisionByZero,

    /// Numeric literal that does not fit its type
    #[error("invalid number")]
    InvalidNumber,

    /// `&` in a formals list not followed by exactly one symbol
    #[error("Function format invalid. Symbol '&' not followed by single symbol.")]
    InvalidFormals,

    /// define/set with a symbol count that disagrees with the value count
    #[error("Function '{function}' passed too many arguments for symbols. Got {got}, Expected {expected}.")]
    DefinitionMismatch {
        function: &'static str,
        got: usize,
        expected: usize,
    },

    /// Lambda applied to more arguments than it has formals
    #[error("Function passed too many arguments. Got {got}, Expected {expected}.")]
    TooManyArguments { got: usize, expected: usize },

    /// define/set given a non-symbol in its names list
    #[error("Function '{function}' cannot define non-symbol. Got {got}, Expected Symbol.")]
    DefineNonSymbol {
        function: &'static str,
        got: &'static str,
    },

    /// Lambda formals containing a non-symbol
    #[error("Cannot define non-symbol. Got {got}, Expected Symbol.")]
    NonSymbolFormal { got: &'static str },

    #[error("Type {0} is not comparable.")]
    NotComparable(&'static str),

    #[error("file failure")]
    FileFailure,

    /// Error raised from Liz code via the `error` builtin
    #[error("{0}")]
    Raised(String),
}

impl LizError {
    /// Create an arity error for a named builtin
    pub fn arity(function: &'static str, got: usize, expected: usize) -> Self {
        LizError::Arity {
            function,
            got,
            expected,
        }
    }

    /// Create a type mismatch error from the offending value
    pub fn type_mismatch(
        function: &'static str,
        position: usize,
        actual: &Value,
        expected: &'static str,
    ) -> Self {
        LizError::Type {
            function,
            position,
            got: actual.type_name(),
            expected,
        }
    }

    /// Create an empty-list error for a named builtin
    pub fn empty_list(function: &'static str, position: usize) -> Self {
        LizError::EmptyList { function, position }
    }
}
