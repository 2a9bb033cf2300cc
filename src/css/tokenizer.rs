//! logos-based stylesheet tokenizer.
//!
//! The lexer only distinguishes the structural pieces of a stylesheet. Selector
//! text, at-rule preludes and declaration values are recovered afterwards by
//! slicing the source between token spans, so the lexer never needs to
//! understand value syntax.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `@media` as AtKeyword beats `@` as Word)
//! 2. For equal length matches, earlier-defined variants win

use logos::Logos;

/// Stylesheet token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// `!important` flag (case-insensitive, optional whitespace after `!`).
    #[regex(r"![ \t]*[iI][mM][pP][oO][rR][tT][aA][nN][tT]")]
    Important,

    /// At-keyword: `@media`, `@font-face`.
    #[regex(r"@-?[a-zA-Z_][a-zA-Z0-9_-]*")]
    AtKeyword,

    /// Double-quoted string literal, escapes included.
    #[regex(r#""([^"\\\n]|\\.|\\\n)*""#)]
    StringLiteral,

    /// Single-quoted string literal, escapes included.
    #[regex(r"'([^'\\\n]|\\.|\\\n)*'")]
    StringLiteralSingle,

    /// Any run of characters that carries no structure of its own.
    #[regex(r#"[^ \t\n\r\f{}():;"'!@]+"#)]
    Word,

    /// A lone `!` or `@` that did not start a longer token.
    #[regex(r"[!@]")]
    Delim,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,
}
