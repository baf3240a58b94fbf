use logos::Logos;

/// Tokens of the command grammar. Only literal-bearing tokens carry
/// data; keywords (`true`, `None`, …) are plain identifiers resolved
/// by the parser.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token<'src> {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token("=")]
    Eq,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice())]
    Ident(&'src str),

    #[regex(r"-?[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    /// Quoted string, quotes included; escapes resolved by the parser.
    #[regex(r#""([^"\\]|\\.)*""#, |lex| lex.slice())]
    #[regex(r#"'([^'\\]|\\.)*'"#, |lex| lex.slice())]
    Quoted(&'src str),
}

/// Lex a command line. Returns the byte offset of the first
/// unrecognized input on failure.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, usize> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);
    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push(token),
            Err(_) => return Err(lexer.span().start),
        }
    }
    Ok(tokens)
}

/// Resolve the escapes the grammar admits inside string literals.
pub fn unescape(quoted: &str) -> String {
    let inner = &quoted[1..quoted.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
