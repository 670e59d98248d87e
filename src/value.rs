// ABOUTME: Value types representing Liz data structures and expressions

use crate::env::Environment;
use crate::error::LizError;
use std::fmt;
use std::rc::Rc;

/// Signature shared by every built-in procedure: the environment of the
/// call site plus the already-evaluated argument list, which the builtin
/// owns.
pub type BuiltinFn = fn(&Rc<Environment>, Vec<Value>) -> Result<Value, LizError>;

#[derive(Debug, Clone)]
pub enum Value {
    Long(i64),
    Double(f64),
    Bool(bool),
    Str(String),
    Sym(String),
    /// Evaluable expression; reduced when evaluated
    SExp(Vec<Value>),
    /// Quoted expression; inert data until passed to `eval`
    QExp(Vec<Value>),
    Builtin(BuiltinFn),
    Lambda {
        params: Vec<String>,
        body: Vec<Value>,
        env: Rc<Environment>,
    },
}

impl Value {
    /// The empty S-expression, returned by define, print, and load
    pub fn unit() -> Self {
        Value::SExp(Vec::new())
    }

    /// Type name as it appears in error messages. Builtins and lambdas
    /// share the Function name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Long(_) => "Long",
            Value::Double(_) => "Double",
            Value::Bool(_) => "Boolean",
            Value::Str(_) => "String",
            Value::Sym(_) => "Symbol",
            Value::SExp(_) => "S-Expression",
            Value::QExp(_) => "Q-Expression",
            Value::Builtin(_) | Value::Lambda { .. } => "Function",
        }
    }
}

fn write_items(
    f: &mut fmt::Formatter<'_>,
    items: &[Value],
    open: char,
    close: char,
) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "{}", close)
}

/// Escape a string payload for printing: backslash, quote, newline, and
/// tab become two-character sequences.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Long(n) => write!(f, "{}", n),
            Value::Double(d) => write!(f, "{:.6}", d),
            Value::Bool(b) => write!(f, "{}", if *b { "#true" } else { "#false" }),
            Value::Str(s) => write!(f, "\"{}\"", escape(s)),
            Value::Sym(s) => write!(f, "{}", s),
            Value::SExp(items) => write_items(f, items, '(', ')'),
            Value::QExp(items) => write_items(f, items, '{', '}'),
            Value::Builtin(_) => write!(f, "<builtin>"),
            Value::Lambda { params, body, .. } => {
                write!(f, "(lambda {{")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", param)?;
                }
                write!(f, "}} ")?;
                write_items(f, body, '{', '}')?;
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_builtin(_env: &Rc<Environment>, _args: Vec<Value>) -> Result<Value, LizError> {
        Ok(Value::unit())
    }

    #[test]
    fn test_long_display() {
        assert_eq!(format!("{}", Value::Long(42)), "42");
        assert_eq!(format!("{}", Value::Long(-7)), "-7");
    }

    #[test]
    fn test_double_display_fixed_point() {
        assert_eq!(format!("{}", Value::Double(3.14)), "3.140000");
        assert_eq!(format!("{}", Value::Double(-2.0)), "-2.000000");
    }

    #[test]
    fn test_bool_display() {
        assert_eq!(format!("{}", Value::Bool(true)), "#true");
        assert_eq!(format!("{}", Value::Bool(false)), "#false");
    }

    #[test]
    fn test_string_display_is_escaped() {
        assert_eq!(format!("{}", Value::Str("hello".to_string())), "\"hello\"");
        assert_eq!(
            format!("{}", Value::Str("a\nb\t\"c\"\\".to_string())),
            r#""a\nb\t\"c\"\\""#
        );
    }

    #[test]
    fn test_sexp_and_qexp_display() {
        let sexp = Value::SExp(vec![Value::Long(1), Value::Long(2), Value::Long(3)]);
        assert_eq!(format!("{}", sexp), "(1 2 3)");

        let qexp = Value::QExp(vec![
            Value::Sym("a".to_string()),
            Value::QExp(vec![Value::Long(2)]),
        ]);
        assert_eq!(format!("{}", qexp), "{a {2}}");

        assert_eq!(format!("{}", Value::unit()), "()");
    }

    #[test]
    fn test_function_display() {
        assert_eq!(format!("{}", Value::Builtin(dummy_builtin)), "<builtin>");

        let lambda = Value::Lambda {
            params: vec!["x".to_string(), "y".to_string()],
            body: vec![
                Value::Sym("+".to_string()),
                Value::Sym("x".to_string()),
                Value::Sym("y".to_string()),
            ],
            env: Environment::new(),
        };
        assert_eq!(format!("{}", lambda), "(lambda {x y} {+ x y})");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Long(1).type_name(), "Long");
        assert_eq!(Value::Double(1.0).type_name(), "Double");
        assert_eq!(Value::Bool(true).type_name(), "Boolean");
        assert_eq!(Value::Str(String::new()).type_name(), "String");
        assert_eq!(Value::Sym("x".to_string()).type_name(), "Symbol");
        assert_eq!(Value::SExp(vec![]).type_name(), "S-Expression");
        assert_eq!(Value::QExp(vec![]).type_name(), "Q-Expression");
        assert_eq!(Value::Builtin(dummy_builtin).type_name(), "Function");
    }
}
