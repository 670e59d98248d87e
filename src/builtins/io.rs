//! I/O and error raising: load, print, error
//!
//! - `load "path"`: parse a source file and evaluate each top-level
//!   expression under the current environment
//! - `print a…`: print the arguments space-separated with a newline
//! - `error "msg"`: raise an error carrying the message

use super::{expect_arity, pop_str};
use crate::env::Environment;
use crate::error::LizError;
use crate::eval::eval;
use crate::parser;
use crate::reader;
use crate::value::Value;
use std::rc::Rc;

/// Loads a source file. Per-expression errors are printed and evaluation
/// continues with the next expression; only a missing file is an error.
pub fn builtin_load(env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LizError> {
    expect_arity("load", &args, 1)?;
    let mut args = args.into_iter();
    let path = pop_str("load", 0, &mut args)?;

    let source = std::fs::read_to_string(&path).map_err(|_| LizError::FileFailure)?;
    match parser::parse(&source) {
        Ok(root) => {
            for result in reader::read_program(&root) {
                if let Err(e) = result.and_then(|expr| eval(env, expr)) {
                    println!("Error: {}", e);
                }
            }
        }
        Err(e) => println!("Parse error: {}", e),
    }
    Ok(Value::unit())
}

pub fn builtin_print(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LizError> {
    let line = args
        .iter()
        .map(|arg| arg.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}", line);
    Ok(Value::unit())
}

pub fn builtin_error(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LizError> {
    expect_arity("error", &args, 1)?;
    let mut args = args.into_iter();
    let message = pop_str("error", 0, &mut args)?;
    Err(LizError::Raised(message))
}

/// Register the I/O builtins in the environment
pub fn register(env: &Rc<Environment>) {
    env.define("load".to_string(), Value::Builtin(builtin_load));
    env.define("print".to_string(), Value::Builtin(builtin_print));
    env.define("error".to_string(), Value::Builtin(builtin_error));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::register_builtins;
    use std::fs;
    use std::path::PathBuf;

    fn env() -> Rc<Environment> {
        let env = Environment::new();
        register_builtins(&env);
        env
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).expect("write temp file");
        path
    }

    #[test]
    fn test_load_evaluates_definitions() {
        let e = env();
        let path = temp_file("liz_load_defs.liz", "(define {x} 42)\n(define {y} (+ x 1))\n");

        let result = builtin_load(&e, vec![Value::Str(path.display().to_string())]);
        assert!(matches!(result, Ok(Value::SExp(items)) if items.is_empty()));
        assert!(matches!(e.get("x"), Some(Value::Long(42))));
        assert!(matches!(e.get("y"), Some(Value::Long(43))));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_load_continues_past_errors() {
        let e = env();
        let path = temp_file(
            "liz_load_errs.liz",
            "(define {a} 1)\n(/ 1 0)\n(define {b} 2)\n",
        );

        builtin_load(&e, vec![Value::Str(path.display().to_string())]).unwrap();
        assert!(matches!(e.get("a"), Some(Value::Long(1))));
        assert!(matches!(e.get("b"), Some(Value::Long(2))));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = builtin_load(
            &env(),
            vec![Value::Str("/no/such/file.liz".to_string())],
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "file failure");
    }

    #[test]
    fn test_load_requires_string() {
        let err = builtin_load(&env(), vec![Value::Long(1)]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Function 'load' passed incorrect type for argument 0. Got Long, Expected String."
        );
    }

    #[test]
    fn test_print_returns_unit() {
        let result = builtin_print(&env(), vec![Value::Long(1), Value::Str("x".to_string())]);
        assert!(matches!(result, Ok(Value::SExp(items)) if items.is_empty()));
    }

    #[test]
    fn test_error_raises_message() {
        let err = builtin_error(&env(), vec![Value::Str("boom".to_string())]).unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_error_requires_string() {
        let err = builtin_error(&env(), vec![Value::Long(1)]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Function 'error' passed incorrect type for argument 0. Got Long, Expected String."
        );
    }
}
