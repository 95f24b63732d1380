//! Lexer over the closed ZOF token set.
//!
//! Tokens: real literals, identifiers, `+ - * /`, exponentiation
//! (`**` or `^`), parentheses, comma. Each token keeps the byte
//! position it started at for error reporting.

use super::errors::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Tok {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Pow,
    LParen,
    RParen,
    Comma,
}

impl Tok {
    /// Human-readable rendering for `ParseError::UnexpectedToken`.
    pub(crate) fn describe(&self) -> String {
        match self {
            Tok::Number(v) => v.to_string(),
            Tok::Ident(name) => name.clone(),
            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Pow => "**".to_string(),
            Tok::LParen => "(".to_string(),
            Tok::RParen => ")".to_string(),
            Tok::Comma => ",".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub tok: Tok,
    pub position: usize,
}

/// Splits `input` into tokens, rejecting any character outside the
/// closed set with [`ParseError::UnexpectedChar`].
///
/// Number literals follow the usual float grammar. The exponent marker
/// `e`/`E` is consumed only when followed by an optionally-signed
/// digit, so `2e-3` is one literal while `2*e` multiplies by the
/// constant `e`.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (position, c) = chars[i];
        match c {
            c if c.is_whitespace() => {
                i += 1;
            }

            '0'..='9' | '.' => {
                while i < chars.len() && (chars[i].1.is_ascii_digit() || chars[i].1 == '.') {
                    i += 1;
                }
                if i < chars.len() && (chars[i].1 == 'e' || chars[i].1 == 'E') {
                    let mut j = i + 1;
                    if j < chars.len() && (chars[j].1 == '+' || chars[j].1 == '-') {
                        j += 1;
                    }
                    if j < chars.len() && chars[j].1.is_ascii_digit() {
                        i = j;
                        while i < chars.len() && chars[i].1.is_ascii_digit() {
                            i += 1;
                        }
                    }
                }

                let end = byte_at(&chars, i, input.len());
                let literal = &input[position..end];
                let value = literal.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                    literal: literal.to_string(),
                    position,
                })?;
                tokens.push(Token {
                    tok: Tok::Number(value),
                    position,
                });
            }

            c if c.is_alphabetic() || c == '_' => {
                while i < chars.len() && (chars[i].1.is_alphanumeric() || chars[i].1 == '_') {
                    i += 1;
                }
                let end = byte_at(&chars, i, input.len());
                tokens.push(Token {
                    tok: Tok::Ident(input[position..end].to_string()),
                    position,
                });
            }

            '*' => {
                if i + 1 < chars.len() && chars[i + 1].1 == '*' {
                    tokens.push(Token { tok: Tok::Pow, position });
                    i += 2;
                } else {
                    tokens.push(Token { tok: Tok::Star, position });
                    i += 1;
                }
            }

            '^' => {
                tokens.push(Token { tok: Tok::Pow, position });
                i += 1;
            }

            '+' | '-' | '/' | '(' | ')' | ',' => {
                let tok = match c {
                    '+' => Tok::Plus,
                    '-' => Tok::Minus,
                    '/' => Tok::Slash,
                    '(' => Tok::LParen,
                    ')' => Tok::RParen,
                    _ => Tok::Comma,
                };
                tokens.push(Token { tok, position });
                i += 1;
            }

            other => {
                return Err(ParseError::UnexpectedChar {
                    found: other,
                    position,
                })
            }
        }
    }

    Ok(tokens)
}

/// Byte offset of `chars[i]`, or the end of input past the last char.
#[inline]
fn byte_at(chars: &[(usize, char)], i: usize, input_len: usize) -> usize {
    if i < chars.len() {
        chars[i].0
    } else {
        input_len
    }
}
