// ABOUTME: Parser module producing tagged parse-tree nodes using nom combinators

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{anychar, char, digit1, multispace0, none_of},
    combinator::{opt, recognize},
    multi::many0,
    sequence::preceded,
    IResult, Parser,
};

/// A node of the concrete-syntax tree. Tags carry the substrings the
/// reader dispatches on; leaf text lives in `contents` (string nodes keep
/// their surrounding quotes).
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub tag: &'static str,
    pub contents: String,
    pub children: Vec<Node>,
}

impl Node {
    fn leaf(tag: &'static str, contents: &str) -> Self {
        Node {
            tag,
            contents: contents.to_string(),
            children: Vec::new(),
        }
    }

    fn branch(tag: &'static str, children: Vec<Node>) -> Self {
        Node {
            tag,
            contents: String::new(),
            children,
        }
    }
}

const SYMBOL_CHARS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_+-*/\\=<>!&^%";

/// Parse a line comment: ';' up to the end of the line
fn parse_comment(input: &str) -> IResult<&str, Node> {
    let (input, text) =
        recognize(preceded(char(';'), take_while(|c| c != '\r' && c != '\n'))).parse(input)?;
    Ok((input, Node::leaf("expr|comment", text)))
}

/// Parse a string literal, keeping the quotes and escapes verbatim; the
/// reader unescapes
fn parse_string(input: &str) -> IResult<&str, Node> {
    let (input, raw) = recognize((
        char('"'),
        many0(alt((
            recognize(preceded(char('\\'), anychar)),
            recognize(none_of("\"\\")),
        ))),
        char('"'),
    ))
    .parse(input)?;
    Ok((input, Node::leaf("expr|string", raw)))
}

fn parse_boolean(input: &str) -> IResult<&str, Node> {
    let (input, text) = alt((tag("#true"), tag("#false"))).parse(input)?;
    Ok((input, Node::leaf("expr|boolean", text)))
}

fn parse_double(input: &str) -> IResult<&str, Node> {
    let (input, text) =
        recognize((opt(char('-')), digit1, char('.'), digit1)).parse(input)?;
    Ok((input, Node::leaf("expr|number|double", text)))
}

fn parse_long(input: &str) -> IResult<&str, Node> {
    let (input, text) = recognize((opt(char('-')), digit1)).parse(input)?;
    Ok((input, Node::leaf("expr|number|long", text)))
}

/// Parse a number; a double must win over its integer prefix
fn parse_number(input: &str) -> IResult<&str, Node> {
    alt((parse_double, parse_long)).parse(input)
}

fn parse_symbol(input: &str) -> IResult<&str, Node> {
    let (input, text) = take_while1(|c| SYMBOL_CHARS.contains(c)).parse(input)?;
    Ok((input, Node::leaf("expr|symbol", text)))
}

fn parse_sexp(input: &str) -> IResult<&str, Node> {
    let (input, _) = char('(')(input)?;
    let (input, children) = many0(parse_expr).parse(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, Node::branch("expr|sexp", children)))
}

fn parse_qexp(input: &str) -> IResult<&str, Node> {
    let (input, _) = char('{')(input)?;
    let (input, children) = many0(parse_expr).parse(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char('}')(input)?;
    Ok((input, Node::branch("expr|qexp", children)))
}

/// Main expression parser; alternation order follows the grammar (number
/// before symbol so digit runs lex as numbers)
fn parse_expr(input: &str) -> IResult<&str, Node> {
    let (input, _) = multispace0(input)?;
    alt((
        parse_string,
        parse_comment,
        parse_number,
        parse_symbol,
        parse_boolean,
        parse_sexp,
        parse_qexp,
    ))
    .parse(input)
}

fn parse_top(input: &str) -> IResult<&str, Node> {
    let (input, children) = many0(parse_expr).parse(input)?;
    Ok((input, Node::branch(">", children)))
}

/// Public entry point: parse a complete source text into the root node
/// holding one child per top-level expression
pub fn parse(input: &str) -> Result<Node, String> {
    match parse_top(input) {
        Ok((rest, node)) => {
            let rest = rest.trim_start();
            if rest.is_empty() {
                Ok(node)
            } else {
                Err(format!("unexpected trailing input: '{}'", rest))
            }
        }
        Err(e) => Err(format!("{:?}", e)),
    }
}
