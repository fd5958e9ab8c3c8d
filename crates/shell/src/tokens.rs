//! Shell token splitting
//!
//! Commands are parsed with the `tree-sitter-bash` grammar and the syntax
//! tree is flattened into a token stream. Each token covers the byte range of
//! the node it came from. A command-word node becomes a [`Token::Word`] only
//! when `shlex` can unquote it to a single literal string. Everything a shell
//! would have to interpret gets one of the other variants: control
//! operators, redirections, unquoted globs, expansions, assignments, compound
//! constructs and comments.
//!
//! Tokenizing never fails. Text the grammar cannot make sense of (for
//! example an unterminated quote) becomes [`Token::Unparsed`].

use serde::Serialize;
use std::fmt;
use std::ops::Range;
use tree_sitter::{Node, Parser, Tree};

/// Shell control and redirection operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    #[serde(rename = "||")]
    Or,
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "|")]
    Pipe,
    #[serde(rename = "|&")]
    PipeAll,
    #[serde(rename = ";")]
    Semicolon,
    #[serde(rename = "\n")]
    Newline,
    #[serde(rename = "&")]
    Background,
    #[serde(rename = "(")]
    OpenParen,
    #[serde(rename = ")")]
    CloseParen,
    #[serde(rename = ">")]
    RedirectOutput,
    #[serde(rename = ">>")]
    Append,
    #[serde(rename = ">|")]
    Clobber,
    #[serde(rename = "&>")]
    RedirectAll,
    #[serde(rename = "&>>")]
    AppendAll,
    #[serde(rename = "<")]
    RedirectInput,
    #[serde(rename = "<<<")]
    HereString,
    #[serde(rename = ">&")]
    DuplicateOutput,
    #[serde(rename = "<&")]
    DuplicateInput,
    #[serde(rename = ">&-")]
    CloseOutput,
    #[serde(rename = "<&-")]
    CloseInput,
}

impl Operator {
    pub const ALL: [Operator; 20] = [
        Operator::Or,
        Operator::And,
        Operator::Pipe,
        Operator::PipeAll,
        Operator::Semicolon,
        Operator::Newline,
        Operator::Background,
        Operator::OpenParen,
        Operator::CloseParen,
        Operator::RedirectOutput,
        Operator::Append,
        Operator::Clobber,
        Operator::RedirectAll,
        Operator::AppendAll,
        Operator::RedirectInput,
        Operator::HereString,
        Operator::DuplicateOutput,
        Operator::DuplicateInput,
        Operator::CloseOutput,
        Operator::CloseInput,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Or => "||",
            Operator::And => "&&",
            Operator::Pipe => "|",
            Operator::PipeAll => "|&",
            Operator::Semicolon => ";",
            Operator::Newline => "\n",
            Operator::Background => "&",
            Operator::OpenParen => "(",
            Operator::CloseParen => ")",
            Operator::RedirectOutput => ">",
            Operator::Append => ">>",
            Operator::Clobber => ">|",
            Operator::RedirectAll => "&>",
            Operator::AppendAll => "&>>",
            Operator::RedirectInput => "<",
            Operator::HereString => "<<<",
            Operator::DuplicateOutput => ">&",
            Operator::DuplicateInput => "<&",
            Operator::CloseOutput => ">&-",
            Operator::CloseInput => "<&-",
        }
    }

    /// The operator spelled `text`, if any
    pub fn from_text(text: &str) -> Option<Operator> {
        Operator::ALL.into_iter().find(|op| op.as_str() == text)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One shell token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Token {
    /// A plain word with quoting removed
    Word(String),
    /// A control or redirection operator
    Operator(Operator),
    /// A word containing unquoted glob characters, kept as written
    Glob(String),
    /// A word containing an expansion or bash-only quoting, kept as written
    Expansion(String),
    /// A `NAME=value` prefix, kept as written
    Assignment(String),
    /// A compound construct (`if`, `for`, `[[ ]]`, a heredoc, ...), kept as written
    Construct(String),
    /// Text following an unquoted `#`
    Comment(String),
    /// Text the grammar could not parse, kept as written
    Unparsed(String),
}

impl Token {
    /// Whether the token is a literal string a process could receive as-is
    pub fn is_plain(&self) -> bool {
        matches!(self, Token::Word(_))
    }

    pub fn as_word(&self) -> Option<&str> {
        match self {
            Token::Word(word) => Some(word),
            _ => None,
        }
    }
}

/// A token together with the byte range of its source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub span: Range<usize>,
}

/// Split `input` into shell tokens
pub fn tokenize(input: &str) -> Vec<Token> {
    tokenize_spanned(input)
        .into_iter()
        .map(|spanned| spanned.token)
        .collect()
}

/// Split `input` into shell tokens, keeping source positions
pub fn tokenize_spanned(input: &str) -> Vec<Spanned> {
    let Some(tree) = parse(input) else {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        let start = input.len() - input.trim_start().len();
        return vec![Spanned {
            token: Token::Unparsed(trimmed.to_string()),
            span: start..start + trimmed.len(),
        }];
    };

    let mut out = Vec::new();
    let root = tree.root_node();
    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        visit(child, input, &mut out);
    }
    out
}

/// True when every token is a plain word (vacuously true for no tokens)
pub fn all_plain(tokens: &[Token]) -> bool {
    tokens.iter().all(Token::is_plain)
}

/// Nodes classified as a single command word
const WORD_KINDS: &[&str] = &[
    "word",
    "number",
    "string",
    "raw_string",
    "concatenation",
    "simple_expansion",
    "expansion",
    "command_substitution",
    "process_substitution",
    "arithmetic_expansion",
    "ansi_c_string",
    "translated_string",
    "file_descriptor",
    "extglob_pattern",
];

/// Nodes whose text the shell substitutes or that `shlex` cannot unquote
const EXPANSION_KINDS: &[&str] = &[
    "simple_expansion",
    "expansion",
    "command_substitution",
    "process_substitution",
    "arithmetic_expansion",
    "ansi_c_string",
    "translated_string",
];

/// Statements kept whole
const CONSTRUCT_KINDS: &[&str] = &[
    "if_statement",
    "while_statement",
    "for_statement",
    "c_style_for_statement",
    "case_statement",
    "function_definition",
    "compound_statement",
    "test_command",
    "negated_command",
    "declaration_command",
    "unset_command",
    "heredoc_redirect",
];

fn parse(input: &str) -> Option<Tree> {
    let mut parser = Parser::new();
    if let Err(e) = parser.set_language(&tree_sitter_bash::LANGUAGE.into()) {
        tracing::debug!(error = %e, "bash grammar unavailable");
        return None;
    }
    parser.parse(input, None)
}

fn visit(node: Node<'_>, src: &str, out: &mut Vec<Spanned>) {
    let span = node.byte_range();
    let text = src.get(span.clone()).unwrap_or_default();

    let token = if node.is_missing() {
        Token::Unparsed(String::new())
    } else if node.is_error() {
        Token::Unparsed(text.to_string())
    } else if !node.is_named() {
        match Operator::from_text(node.kind()) {
            Some(op) => Token::Operator(op),
            None => Token::Unparsed(text.to_string()),
        }
    } else {
        let kind = node.kind();
        if kind == "comment" {
            Token::Comment(text.strip_prefix('#').unwrap_or(text).to_string())
        } else if kind == "variable_assignment" {
            Token::Assignment(text.to_string())
        } else if CONSTRUCT_KINDS.contains(&kind) {
            Token::Construct(text.to_string())
        } else if WORD_KINDS.contains(&kind) || node.child_count() == 0 {
            if text.is_empty() {
                return;
            }
            classify_word(node, text, src)
        } else {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                visit(child, src, out);
            }
            return;
        }
    };

    out.push(Spanned { token, span });
}

fn classify_word(node: Node<'_>, text: &str, src: &str) -> Token {
    if node.has_error() {
        return Token::Unparsed(text.to_string());
    }
    if contains_kind(node, EXPANSION_KINDS) {
        return Token::Expansion(text.to_string());
    }
    if has_unquoted_glob(node, src) {
        return Token::Glob(text.to_string());
    }
    match shlex::split(text) {
        Some(mut words) if words.len() == 1 => Token::Word(words.remove(0)),
        _ => Token::Unparsed(text.to_string()),
    }
}

fn contains_kind(node: Node<'_>, kinds: &[&str]) -> bool {
    if kinds.contains(&node.kind()) {
        return true;
    }
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| contains_kind(child, kinds));
    found
}

fn has_unquoted_glob(node: Node<'_>, src: &str) -> bool {
    match node.kind() {
        "string" | "raw_string" => false,
        "concatenation" => {
            let mut cursor = node.walk();
            let found = node
                .children(&mut cursor)
                .any(|child| has_unquoted_glob(child, src));
            found
        }
        _ => src
            .get(node.byte_range())
            .is_some_and(contains_glob_char),
    }
}

fn contains_glob_char(text: &str) -> bool {
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '*' | '?' | '[' => return true,
            _ => {}
        }
    }
    false
}
