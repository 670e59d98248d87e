//! Comparison operations: >, >=, =, !, <, <=
//!
//! Exactly two arguments; `!` is not-equal. Operands of different types
//! compare `#false`. Longs and Doubles order numerically; strings support
//! only equality; any other same-typed pair is not comparable.

use crate::env::Environment;
use crate::error::LizError;
use crate::value::Value;
use std::rc::Rc;

#[derive(Clone, Copy)]
enum Cmp {
    Gt,
    Ge,
    Eq,
    Ne,
    Lt,
    Le,
}

fn compare(function: &'static str, args: Vec<Value>, cmp: Cmp) -> Result<Value, LizError> {
    if args.len() != 2 {
        return Err(LizError::arity(function, args.len(), 2));
    }

    let result = match (&args[0], &args[1]) {
        (Value::Long(a), Value::Long(b)) => match cmp {
            Cmp::Gt => a > b,
            Cmp::Ge => a >= b,
            Cmp::Eq => a == b,
            Cmp::Ne => a != b,
            Cmp::Lt => a < b,
            Cmp::Le => a <= b,
        },
        (Value::Double(a), Value::Double(b)) => match cmp {
            Cmp::Gt => a > b,
            Cmp::Ge => a >= b,
            Cmp::Eq => a == b,
            Cmp::Ne => a != b,
            Cmp::Lt => a < b,
            Cmp::Le => a <= b,
        },
        (Value::Str(a), Value::Str(b)) => match cmp {
            Cmp::Eq => a == b,
            Cmp::Ne => a != b,
            _ => return Err(LizError::NotComparable("String")),
        },
        // Mismatched types are unequal rather than an error
        (a, b) if a.type_name() != b.type_name() => false,
        (a, _) => return Err(LizError::NotComparable(a.type_name())),
    };
    Ok(Value::Bool(result))
}

pub fn builtin_gt(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LizError> {
    compare(">", args, Cmp::Gt)
}

pub fn builtin_ge(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LizError> {
    compare(">=", args, Cmp::Ge)
}

pub fn builtin_eq(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LizError> {
    compare("=", args, Cmp::Eq)
}

pub fn builtin_ne(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LizError> {
    compare("!", args, Cmp::Ne)
}

pub fn builtin_lt(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LizError> {
    compare("<", args, Cmp::Lt)
}

pub fn builtin_le(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LizError> {
    compare("<=", args, Cmp::Le)
}

/// Register all comparison builtins in the environment
pub fn register(env: &Rc<Environment>) {
    env.define(">".to_string(), Value::Builtin(builtin_gt));
    env.define(">=".to_string(), Value::Builtin(builtin_ge));
    env.define("=".to_string(), Value::Builtin(builtin_eq));
    env.define("!".to_string(), Value::Builtin(builtin_ne));
    env.define("<".to_string(), Value::Builtin(builtin_lt));
    env.define("<=".to_string(), Value::Builtin(builtin_le));
}
