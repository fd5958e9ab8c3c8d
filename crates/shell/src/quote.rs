//! Shell-safe serialization of token streams

use crate::tokens::Token;
use std::borrow::Cow;

/// Quote a single word for a POSIX shell.
///
/// Words `shlex` refuses to quote (they contain a NUL byte, which no shell
/// argument can carry) are returned unchanged.
pub fn quote(word: &str) -> Cow<'_, str> {
    shlex::try_quote(word).unwrap_or(Cow::Borrowed(word))
}

/// Render one token as shell source text
pub fn render(token: &Token) -> Cow<'_, str> {
    match token {
        Token::Word(word) => quote(word),
        Token::Operator(op) => Cow::Borrowed(op.as_str()),
        Token::Glob(raw)
        | Token::Expansion(raw)
        | Token::Assignment(raw)
        | Token::Construct(raw)
        | Token::Unparsed(raw) => Cow::Borrowed(raw),
        Token::Comment(text) => Cow::Owned(format!("#{text}")),
    }
}

/// Join tokens back into a single shell command string
pub fn join<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> String {
    tokens
        .into_iter()
        .map(render)
        .collect::<Vec<_>>()
        .join(" ")
}
