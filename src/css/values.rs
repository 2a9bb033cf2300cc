//! Declaration value tokenizer.
//!
//! Splits a raw value on whitespace outside parentheses and quotes, emitting
//! top-level `/` and `,` as tokens of their own. Each word is then classified
//! by shape with a small logos lexer that must consume the whole word.
//!
//! Function calls stay a single token; their argument text is tokenized on
//! demand by [`ValueToken::arguments`].

use logos::Logos;

/// Errors from value tokenizing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("unbalanced parenthesis")]
    UnbalancedParenthesis,
    #[error("unterminated string")]
    UnterminatedString,
}

/// Word shapes. Anything that does not lex as exactly one of these is
/// [`TokenKind::Other`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    #[regex(r"[+-]?([0-9]+(\.[0-9]+)?|\.[0-9]+)([eE][+-]?[0-9]+)?")]
    Number,

    #[regex(r"[+-]?([0-9]+(\.[0-9]+)?|\.[0-9]+)([eE][+-]?[0-9]+)?%")]
    Percentage,

    #[regex(r"[+-]?([0-9]+(\.[0-9]+)?|\.[0-9]+)([eE][+-]?[0-9]+)?[a-zA-Z]+")]
    Dimension,

    #[regex(r"#[0-9a-zA-Z_-]+")]
    Hash,

    #[regex(r"-?[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,
}

/// Classified kind of a value token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Unitless number: `0`, `1.5`, `-.5`.
    Number(f64),
    /// Number with a unit, unit lowercased: `10px`, `1.5rem`, `5deg`.
    Dimension(f64, String),
    /// Number with `%`.
    Percentage(f64),
    /// Identifier or keyword: `auto`, `solid`, `red`.
    Ident,
    /// `#` followed by a name: `#f00`.
    Hash,
    /// Quoted string with escapes resolved.
    QuotedString(String),
    /// Function call `name(args)`; `arguments` is the raw inner text.
    Function { name: String, arguments: String },
    /// Top-level `/`.
    Slash,
    /// Top-level `,`.
    Comma,
    /// Anything else.
    Other,
}

/// A contiguous slice of a raw value with its classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueToken {
    pub kind: TokenKind,
    /// The raw source text of the token.
    pub text: String,
}

impl ValueToken {
    fn new(kind: TokenKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }

    /// Lowercased keyword text if this token is an identifier.
    pub fn keyword(&self) -> Option<String> {
        match self.kind {
            TokenKind::Ident => Some(self.text.to_ascii_lowercase()),
            _ => None,
        }
    }

    /// Case-insensitive keyword comparison.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Ident && self.text.eq_ignore_ascii_case(keyword)
    }

    /// The unitless number, if this token is one.
    pub fn number(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Identifiers, `#` literals and function calls can stand for a color.
    /// Numbers, strings and delimiters never do.
    pub fn is_color_like(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Ident | TokenKind::Hash | TokenKind::Function { .. }
        )
    }

    /// Tokenized arguments of a function call, split on top-level commas.
    ///
    /// Returns `None` when this token is not a function call.
    pub fn arguments(&self) -> Option<Result<Vec<Vec<ValueToken>>, ValueError>> {
        match &self.kind {
            TokenKind::Function { arguments, .. } => Some(
                split_top_level(arguments, ',')
                    .into_iter()
                    .map(tokenize_value)
                    .collect(),
            ),
            _ => None,
        }
    }
}

/// Tokenize a raw declaration value.
pub fn tokenize_value(input: &str) -> Result<Vec<ValueToken>, ValueError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices();
    let mut start: Option<usize> = None;
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    while let Some((i, c)) = chars.next() {
        if let Some(q) = quote {
            if c == '\\' {
                chars.next();
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '"' | '\'' => {
                start.get_or_insert(i);
                quote = Some(c);
            }
            '(' => {
                start.get_or_insert(i);
                depth += 1;
            }
            ')' => {
                if depth == 0 {
                    return Err(ValueError::UnbalancedParenthesis);
                }
                depth -= 1;
            }
            c if depth == 0 && (c.is_whitespace() || c == '/' || c == ',') => {
                if let Some(s) = start.take() {
                    tokens.push(classify(&input[s..i]));
                }
                match c {
                    '/' => tokens.push(ValueToken::new(TokenKind::Slash, "/")),
                    ',' => tokens.push(ValueToken::new(TokenKind::Comma, ",")),
                    _ => {}
                }
            }
            _ => {
                start.get_or_insert(i);
            }
        }
    }

    if quote.is_some() {
        return Err(ValueError::UnterminatedString);
    }
    if depth > 0 {
        return Err(ValueError::UnbalancedParenthesis);
    }
    if let Some(s) = start {
        tokens.push(classify(&input[s..]));
    }

    Ok(tokens)
}

/// Classify a single word (no top-level whitespace) into a [`ValueToken`].
pub fn classify(word: &str) -> ValueToken {
    if let Some(inner) = quoted_inner(word) {
        return ValueToken::new(TokenKind::QuotedString(unescape(inner)), word);
    }
    if let Some((name, arguments)) = function_parts(word) {
        return ValueToken::new(
            TokenKind::Function {
                name: name.to_string(),
                arguments: arguments.to_string(),
            },
            word,
        );
    }

    let mut lexer = Shape::lexer(word);
    let shape = match (lexer.next(), lexer.span().end == word.len()) {
        (Some(Ok(shape)), true) => shape,
        _ => return ValueToken::new(TokenKind::Other, word),
    };

    let kind = match shape {
        Shape::Number => finite(word).map(TokenKind::Number).unwrap_or(TokenKind::Other),
        Shape::Percentage => finite(&word[..word.len() - 1])
            .map(TokenKind::Percentage)
            .unwrap_or(TokenKind::Other),
        Shape::Dimension => {
            let (number, unit) = split_dimension(word);
            finite(number)
                .map(|n| TokenKind::Dimension(n, unit.to_ascii_lowercase()))
                .unwrap_or(TokenKind::Other)
        }
        Shape::Hash => TokenKind::Hash,
        Shape::Ident => TokenKind::Ident,
    };

    ValueToken::new(kind, word)
}

/// Parse a numeric literal, rejecting values that overflow to infinity.
fn finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Split a dimension string like "1.5rem" or "1e3px" into (number, unit).
///
/// An `e` only belongs to the number when a digit (optionally signed) follows,
/// so `1em` splits as `("1", "em")`.
fn split_dimension(s: &str) -> (&str, &str) {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
        i += 1;
    }
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        if bytes.get(j).is_some_and(u8::is_ascii_digit) {
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }

    (&s[..i], &s[i..])
}

/// The text between the quotes if `word` is exactly one quoted string.
fn quoted_inner(word: &str) -> Option<&str> {
    let quote = word.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let mut chars = word.char_indices().skip(1);

    while let Some((i, c)) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == quote {
            return (i + 1 == word.len()).then(|| &word[1..i]);
        }
    }

    None
}

/// `(name, inner)` if `word` is exactly `name(inner)`.
fn function_parts(word: &str) -> Option<(&str, &str)> {
    let open = word.find('(')?;
    if !word.ends_with(')') {
        return None;
    }

    let name = &word[..open];
    let mut lexer = Shape::lexer(name);
    if !matches!(lexer.next(), Some(Ok(Shape::Ident))) || lexer.span().end != name.len() {
        return None;
    }

    // The paren opened after the name must be the one closed at the end.
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut chars = word[open..].char_indices();
    while let Some((i, c)) = chars.next() {
        match quote {
            Some(_) if c == '\\' => {
                chars.next();
            }
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '"' | '\'' => quote = Some(c),
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return (open + i + 1 == word.len()).then(|| (name, &word[open + 1..open + i]));
                    }
                }
                _ => {}
            },
        }
    }

    None
}

/// Split `input` on `separator` outside parentheses and quotes, trimming each
/// piece.
fn split_top_level(input: &str, separator: char) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;
    let mut chars = input.char_indices();

    while let Some((i, c)) = chars.next() {
        match quote {
            Some(_) if c == '\\' => {
                chars.next();
            }
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '"' | '\'' => quote = Some(c),
                '(' => depth += 1,
                ')' => depth = depth.saturating_sub(1),
                c if c == separator && depth == 0 => {
                    pieces.push(input[start..i].trim());
                    start = i + c.len_utf8();
                }
                _ => {}
            },
        }
    }
    pieces.push(input[start..].trim());

    pieces
}

/// Resolve CSS string escapes: `\"` is a literal quote, `\A ` is a newline
/// (hex escapes take up to six digits and one trailing whitespace), and an
/// escaped newline is a line continuation.
fn unescape(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.peek().copied() {
            None => {}
            Some('\n') => {
                chars.next();
            }
            Some(h) if h.is_ascii_hexdigit() => {
                let mut code = 0u32;
                let mut digits = 0;
                while digits < 6 {
                    match chars.peek().and_then(|c| c.to_digit(16)) {
                        Some(d) => {
                            code = code * 16 + d;
                            digits += 1;
                            chars.next();
                        }
                        None => break,
                    }
                }
                if chars.peek().is_some_and(|c| c.is_whitespace()) {
                    chars.next();
                }
                let ch = match code {
                    0 => char::REPLACEMENT_CHARACTER,
                    code => char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER),
                };
                out.push(ch);
            }
            Some(other) => {
                chars.next();
                out.push(other);
            }
        }
    }

    out
}
