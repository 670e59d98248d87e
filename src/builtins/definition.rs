//! Binding and function construction: define, set, lambda
//!
//! - `define {names} v…`: bind each name at the root environment
//! - `set {names} v…`: bind each name in the current scope
//! - `lambda {formals} {body}`: build a closure over the current
//!   environment; `&` in the formals introduces a rest parameter

use super::{expect_arity, pop_qexp};
use crate::env::Environment;
use crate::error::LizError;
use crate::value::Value;
use std::rc::Rc;

/// Shared body of define and set; the name decides the target scope
fn builtin_var(
    env: &Rc<Environment>,
    args: Vec<Value>,
    function: &'static str,
) -> Result<Value, LizError> {
    if args.is_empty() {
        return Err(LizError::arity(function, 0, 1));
    }
    let mut args = args.into_iter();
    let names = pop_qexp(function, 0, &mut args)?;

    let mut syms = Vec::with_capacity(names.len());
    for name in names {
        match name {
            Value::Sym(s) => syms.push(s),
            other => {
                return Err(LizError::DefineNonSymbol {
                    function,
                    got: other.type_name(),
                })
            }
        }
    }

    let values: Vec<Value> = args.collect();
    if syms.len() != values.len() {
        return Err(LizError::DefinitionMismatch {
            function,
            got: syms.len(),
            expected: values.len(),
        });
    }

    for (name, value) in syms.into_iter().zip(values) {
        if function == "define" {
            env.define_global(name, value);
        } else {
            env.define(name, value);
        }
    }
    Ok(Value::unit())
}

pub fn builtin_define(env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LizError> {
    builtin_var(env, args, "define")
}

pub fn builtin_set(env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LizError> {
    builtin_var(env, args, "set")
}

/// Build a lambda closing over the environment it is evaluated in
pub fn builtin_lambda(env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, LizError> {
    expect_arity("lambda", &args, 2)?;
    let mut args = args.into_iter();
    let formals = pop_qexp("lambda", 0, &mut args)?;
    let body = pop_qexp("lambda", 1, &mut args)?;

    let mut params = Vec::with_capacity(formals.len());
    for formal in formals {
        match formal {
            Value::Sym(s) => params.push(s),
            other => {
                return Err(LizError::NonSymbolFormal {
                    got: other.type_name(),
                })
            }
        }
    }

    Ok(Value::Lambda {
        params,
        body,
        env: Rc::clone(env),
    })
}

/// Register the definition builtins in the environment
pub fn register(env: &Rc<Environment>) {
    env.define("define".to_string(), Value::Builtin(builtin_define));
    env.define("set".to_string(), Value::Builtin(builtin_set));
    env.define("lambda".to_string(), Value::Builtin(builtin_lambda));
}
