//! Recursive descent stylesheet parser.
//!
//! Parses CSS text into a [`StyleSheet`] of rules and at-rule blocks. Uses the
//! logos-based tokenizer from [`crate::css::tokenizer`] for structure and
//! recovers selector, prelude and value text by slicing the source between
//! token spans.

use logos::Logos;

use crate::css::model::*;
use crate::css::tokenizer::Token;

/// Errors from stylesheet parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected token at byte {position}: {message}")]
    UnexpectedToken { position: usize, message: String },
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),
}

/// A token with its byte span in the comment-free source.
#[derive(Debug, Clone, Copy)]
struct PToken {
    token: Token,
    start: usize,
    end: usize,
}

/// Strip CSS block comments (`/* ... */`) from the input, replacing each
/// comment with a single space. Comment markers inside quoted strings are
/// left alone.
fn strip_comments(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            result.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    result.push(escaped);
                }
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '"' | '\'' => {
                quote = Some(c);
                result.push(c);
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                // An unterminated comment consumes the rest of the input.
                for inner in chars.by_ref() {
                    if prev == '*' && inner == '/' {
                        break;
                    }
                    prev = inner;
                }
                result.push(' ');
            }
            _ => result.push(c),
        }
    }

    result
}

/// Tokenize input using logos with span information preserved.
fn tokenize_with_spans(input: &str) -> Result<Vec<PToken>, ParseError> {
    let mut lexer = Token::lexer(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push(PToken {
                token,
                start: span.start,
                end: span.end,
            }),
            Err(()) => {
                return Err(ParseError::UnexpectedToken {
                    position: span.start,
                    message: format!("unterminated string or stray '{}'", lexer.slice()),
                });
            }
        }
    }

    Ok(tokens)
}

/// Parse a CSS string into a [`StyleSheet`].
pub fn parse_css(input: &str) -> Result<StyleSheet, ParseError> {
    let cleaned = strip_comments(input);
    let tokens = tokenize_with_spans(&cleaned)?;

    let mut parser = Parser {
        source: &cleaned,
        tokens,
        cursor: 0,
    };

    let mut blocks = Vec::new();
    while let Some(tok) = parser.peek() {
        match tok.token {
            Token::Semicolon => {
                parser.advance();
            }
            Token::AtKeyword => blocks.push(Block::AtRule(parser.parse_at_rule()?)),
            _ => blocks.push(Block::Rule(parser.parse_rule()?)),
        }
    }

    Ok(StyleSheet { blocks })
}

/// Recursive descent parser state.
struct Parser<'a> {
    source: &'a str,
    tokens: Vec<PToken>,
    cursor: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<PToken> {
        self.tokens.get(self.cursor).copied()
    }

    fn advance(&mut self) -> Option<PToken> {
        let tok = self.peek()?;
        self.cursor += 1;
        Some(tok)
    }

    fn expect(&mut self, expected: Token) -> Result<PToken, ParseError> {
        match self.advance() {
            Some(tok) if tok.token == expected => Ok(tok),
            Some(tok) => Err(ParseError::UnexpectedToken {
                position: tok.start,
                message: format!(
                    "expected {:?}, got {:?} '{}'",
                    expected,
                    tok.token,
                    self.text(tok)
                ),
            }),
            None => Err(ParseError::UnexpectedEof(format!("expected {expected:?}"))),
        }
    }

    fn text(&self, tok: PToken) -> &'a str {
        &self.source[tok.start..tok.end]
    }

    fn slice(&self, start: usize, end: usize) -> &'a str {
        self.source[start..end].trim()
    }

    /// Parse a style rule: selector text `{` declarations `}`.
    fn parse_rule(&mut self) -> Result<Rule, ParseError> {
        let start = self.peek().map(|t| t.start).unwrap_or(self.source.len());

        let brace = loop {
            match self.advance() {
                Some(tok) if tok.token == Token::BraceOpen => break tok,
                Some(tok) if matches!(tok.token, Token::BraceClose | Token::Semicolon) => {
                    return Err(ParseError::UnexpectedToken {
                        position: tok.start,
                        message: format!("expected '{{' after selector, got '{}'", self.text(tok)),
                    });
                }
                Some(_) => {}
                None => return Err(ParseError::UnexpectedEof("expected '{' after selector".into())),
            }
        };

        let selector = self.slice(start, brace.start);
        if selector.is_empty() {
            return Err(ParseError::UnexpectedToken {
                position: brace.start,
                message: "expected selector before '{'".into(),
            });
        }

        let mut rule = Rule {
            selector: selector.to_string(),
            declarations: Vec::new(),
        };
        if rule.selector_members().iter().any(|s| s.is_empty()) {
            return Err(ParseError::UnexpectedToken {
                position: start,
                message: format!("empty selector in list '{}'", rule.selector),
            });
        }

        rule.declarations = self.parse_declarations()?;
        self.expect(Token::BraceClose)?;
        Ok(rule)
    }

    /// Parse declarations between `{` and `}`, leaving the `}` unconsumed.
    fn parse_declarations(&mut self) -> Result<Vec<Declaration>, ParseError> {
        let mut declarations = Vec::new();

        loop {
            match self.peek() {
                None => return Err(ParseError::UnexpectedEof("expected '}'".into())),
                Some(tok) if tok.token == Token::BraceClose => break,
                Some(tok) if tok.token == Token::Semicolon => {
                    self.advance();
                }
                Some(_) => {
                    let position = declarations.len();
                    declarations.push(self.parse_declaration(position)?);
                }
            }
        }

        Ok(declarations)
    }

    /// Parse a single declaration: `property: raw value [!important]`.
    fn parse_declaration(&mut self, position: usize) -> Result<Declaration, ParseError> {
        let start = self.peek().map(|t| t.start).unwrap_or(self.source.len());

        let colon = loop {
            match self.advance() {
                Some(tok) if tok.token == Token::Colon => break tok,
                Some(tok)
                    if matches!(
                        tok.token,
                        Token::Semicolon | Token::BraceClose | Token::BraceOpen
                    ) =>
                {
                    return Err(ParseError::UnexpectedToken {
                        position: tok.start,
                        message: format!(
                            "expected ':' after property '{}'",
                            self.slice(start, tok.start)
                        ),
                    });
                }
                Some(_) => {}
                None => return Err(ParseError::UnexpectedEof("expected ':' after property".into())),
            }
        };

        let property = self.slice(start, colon.start);
        if property.is_empty() {
            return Err(ParseError::UnexpectedToken {
                position: colon.start,
                message: "expected property name before ':'".into(),
            });
        }

        // Values run until `;` or `}` outside parentheses.
        let mut depth = 0usize;
        let mut end = colon.end;
        let mut important = false;
        while let Some(tok) = self.peek() {
            match tok.token {
                Token::Semicolon | Token::BraceClose if depth == 0 => break,
                Token::BraceOpen => {
                    return Err(ParseError::UnexpectedToken {
                        position: tok.start,
                        message: format!("unexpected '{{' in value of '{property}'"),
                    });
                }
                Token::ParenOpen => depth += 1,
                Token::ParenClose => depth = depth.saturating_sub(1),
                Token::Important if depth == 0 => important = true,
                _ => {}
            }
            if tok.token != Token::Important && !important {
                end = tok.end;
            }
            self.advance();
        }

        if self.peek().is_some_and(|t| t.token == Token::Semicolon) {
            self.advance();
        }

        Ok(Declaration {
            property: property.to_string(),
            value: self.slice(colon.end, end).to_string(),
            position,
        })
    }

    /// Parse an at-rule. `@media` blocks keep their nested style rules; any
    /// other block is skipped, as is a statement at-rule ending in `;`.
    fn parse_at_rule(&mut self) -> Result<AtRule, ParseError> {
        let keyword = self.expect(Token::AtKeyword)?;
        let name = self.text(keyword)[1..].to_ascii_lowercase();

        let mut depth = 0usize;
        let terminator = loop {
            match self.advance() {
                Some(tok) if depth == 0 && tok.token == Token::BraceOpen => break Some(tok),
                Some(tok) if depth == 0 && tok.token == Token::Semicolon => break Some(tok),
                Some(tok) if tok.token == Token::BraceClose => {
                    return Err(ParseError::UnexpectedToken {
                        position: tok.start,
                        message: format!("unexpected '}}' in @{name} prelude"),
                    });
                }
                Some(tok) if tok.token == Token::ParenOpen => depth += 1,
                Some(tok) if tok.token == Token::ParenClose => depth = depth.saturating_sub(1),
                Some(_) => {}
                None => break None,
            }
        };

        let prelude_end = terminator.map(|t| t.start).unwrap_or(self.source.len());
        let prelude = self.slice(keyword.end, prelude_end).to_string();

        let mut rules = Vec::new();
        match terminator {
            Some(tok) if tok.token == Token::BraceOpen => {
                if name == "media" {
                    loop {
                        match self.peek() {
                            None => return Err(ParseError::UnexpectedEof(format!("expected '}}' closing @{name}"))),
                            Some(t) if t.token == Token::BraceClose => break,
                            Some(t) if t.token == Token::Semicolon => {
                                self.advance();
                            }
                            // Nested at-rules inside @media are not bucketed.
                            Some(t) if t.token == Token::AtKeyword => {
                                self.parse_at_rule()?;
                            }
                            Some(_) => rules.push(self.parse_rule()?),
                        }
                    }
                    self.expect(Token::BraceClose)?;
                } else {
                    self.skip_block(&name)?;
                }
            }
            _ => {}
        }

        Ok(AtRule {
            name,
            prelude,
            rules,
        })
    }

    /// Skip the remainder of a `{ ... }` block whose `{` was just consumed.
    fn skip_block(&mut self, name: &str) -> Result<(), ParseError> {
        let mut depth = 1usize;
        while depth > 0 {
            match self.advance() {
                Some(tok) if tok.token == Token::BraceOpen => depth += 1,
                Some(tok) if tok.token == Token::BraceClose => depth -= 1,
                Some(_) => {}
                None => return Err(ParseError::UnexpectedEof(format!("expected '}}' closing @{name}"))),
            }
        }
        Ok(())
    }
}
