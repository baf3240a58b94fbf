use crate::error::CommandError;
use crate::tokenizer::{tokenize, unescape, Token};

/// Literal argument value. The grammar admits nothing else: no
/// identifiers, no nesting, no expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    Str(String),
    Bool(bool),
    List(Vec<String>),
    /// Explicit `None`; treated as an omitted argument.
    None,
}

/// One parsed command: an operation name and its keyword arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub name: String,
    pub args: Vec<(String, Literal)>,
}

/// Parse one line of the form `operation_name(arg=value, ...)`.
pub fn parse_invocation(line: &str) -> Result<Invocation, CommandError> {
    let tokens = tokenize(line)
        .map_err(|pos| CommandError::Syntax(format!("unrecognized input at byte {pos}")))?;
    let mut parser = Parser { tokens, pos: 0 };

    let name = parser.expect_ident("operation name")?;
    parser.expect(&Token::LParen)?;

    let mut args: Vec<(String, Literal)> = Vec::new();
    if !parser.check(&Token::RParen) {
        loop {
            let key = parser.expect_ident("argument name")?;
            parser.expect(&Token::Eq)?;
            let value = parser.parse_literal()?;
            if args.iter().any(|(existing, _)| *existing == key) {
                return Err(CommandError::Syntax(format!("duplicate argument '{key}'")));
            }
            args.push((key, value));

            if !parser.match_token(&Token::Comma) {
                break;
            }
            if parser.check(&Token::RParen) {
                break;
            }
        }
    }
    parser.expect(&Token::RParen)?;
    parser.expect_end()?;

    Ok(Invocation { name, args })
}

struct Parser<'src> {
    tokens: Vec<Token<'src>>,
    pos: usize,
}

impl<'src> Parser<'src> {
    fn peek(&self) -> Option<&Token<'src>> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token<'src>> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn check(&self, expected: &Token<'src>) -> bool {
        self.peek() == Some(expected)
    }

    fn match_token(&mut self, expected: &Token<'src>) -> bool {
        if self.check(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: &Token<'src>) -> Result<(), CommandError> {
        match self.advance() {
            Some(found) if found == *expected => Ok(()),
            found => Err(CommandError::Syntax(format!(
                "expected {expected:?}, found {found:?}"
            ))),
        }
    }

    fn expect_ident(&mut self, what: &str) -> Result<String, CommandError> {
        match self.advance() {
            Some(Token::Ident(name)) => Ok(name.to_string()),
            found => Err(CommandError::Syntax(format!(
                "expected {what}, found {found:?}"
            ))),
        }
    }

    fn expect_end(&mut self) -> Result<(), CommandError> {
        match self.peek() {
            None => Ok(()),
            Some(found) => Err(CommandError::Syntax(format!(
                "trailing input after invocation: {found:?}"
            ))),
        }
    }

    fn parse_literal(&mut self) -> Result<Literal, CommandError> {
        match self.advance() {
            Some(Token::Number(value)) => Ok(Literal::Number(value)),
            Some(Token::Quoted(raw)) => Ok(Literal::Str(unescape(raw))),
            Some(Token::Ident(word)) => match word {
                "true" | "True" => Ok(Literal::Bool(true)),
                "false" | "False" => Ok(Literal::Bool(false)),
                "None" | "null" => Ok(Literal::None),
                other => Err(CommandError::Syntax(format!(
                    "'{other}' is not a literal; only numbers, strings, booleans and \
                     lists of strings are allowed"
                ))),
            },
            Some(Token::LBracket) => {
                let mut items = Vec::new();
                if !self.check(&Token::RBracket) {
                    loop {
                        match self.advance() {
                            Some(Token::Quoted(raw)) => items.push(unescape(raw)),
                            found => {
                                return Err(CommandError::Syntax(format!(
                                    "lists may only hold quoted strings, found {found:?}"
                                )))
                            }
                        }
                        if !self.match_token(&Token::Comma) {
                            break;
                        }
                        if self.check(&Token::RBracket) {
                            break;
                        }
                    }
                }
                self.expect(&Token::RBracket)?;
                Ok(Literal::List(items))
            }
            found => Err(CommandError::Syntax(format!(
                "expected literal, found {found:?}"
            ))),
        }
    }
}
