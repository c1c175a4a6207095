use super::error::ParseError;
use super::node::{Literal, Node, Parameter, Sequence};
use super::token::{tokenize, Token, TokenKind};

const END_OF_INPUT: &str = "end of input";

/// Parses a route pattern into its root [`Sequence`].
pub fn parse(pattern: &str) -> Result<Sequence, ParseError> {
    let tokens = tokenize(pattern);
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
    };

    let root = parser.parse_sequence()?;

    let rest = &tokens[parser.pos..];
    if !rest.is_empty() {
        let remaining: String = rest.iter().map(|t| t.text).collect();
        return Err(ParseError::TrailingTokens { remaining });
    }

    Ok(root)
}

struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
}

impl<'a> Parser<'_, 'a> {
    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token<'a>> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn expect(
        &mut self,
        kind: TokenKind,
        open: &'static str,
        close: &'static str,
    ) -> Result<(), ParseError> {
        match self.peek() {
            Some(t) if t.kind == kind => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(ParseError::Unclosed { open, close }),
        }
    }

    /// Stops before a `]` or at end of input.
    fn parse_sequence(&mut self) -> Result<Sequence, ParseError> {
        let mut nodes: Vec<Node> = Vec::new();

        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::String => {
                    self.pos += 1;
                    // the tokenizer never yields empty strings
                    if let Some(lit) = Literal::new(token.text) {
                        nodes.push(lit.into());
                    }
                }
                TokenKind::OpenBrace => {
                    self.pos += 1;
                    let param = self.parse_parameter()?;
                    self.expect(TokenKind::CloseBrace, "{", "}")?;
                    nodes.push(param.into());
                }
                TokenKind::OpenBracket => {
                    self.pos += 1;
                    let inner = self.parse_sequence()?;
                    self.expect(TokenKind::CloseBracket, "[", "]")?;
                    nodes.push(Node::Optional(inner));
                }
                TokenKind::CloseBracket => break,
                TokenKind::Colon | TokenKind::CloseBrace => {
                    return Err(ParseError::UnexpectedToken {
                        found: token.to_string(),
                    })
                }
            }
        }

        Ok(Sequence::new(nodes))
    }

    /// Parses `name` or `name:regex`, leaving the closing brace in place.
    fn parse_parameter(&mut self) -> Result<Parameter, ParseError> {
        let name = match self.bump() {
            Some(t) if t.kind == TokenKind::String => t.text,
            other => {
                return Err(ParseError::ExpectedParameterName {
                    found: describe(other),
                })
            }
        };

        match self.peek() {
            Some(t) if t.kind == TokenKind::CloseBrace => return Ok(Parameter::new(name, None)),
            Some(t) if t.kind == TokenKind::Colon => self.pos += 1,
            other => {
                return Err(ParseError::ExpectedColonOrCloseBrace {
                    name: name.to_owned(),
                    found: describe(other),
                })
            }
        }

        let mut regex = String::new();
        let mut depth: usize = 0;
        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::OpenBrace => depth += 1,
                TokenKind::CloseBrace if depth == 0 => break,
                TokenKind::CloseBrace => depth -= 1,
                _ => {}
            }
            self.pos += 1;
            regex.push_str(token.text);
        }

        if depth != 0 {
            return Err(ParseError::Unclosed {
                open: "{",
                close: "}",
            });
        }

        Ok(Parameter::new(name, Some(regex.into())))
    }
}

fn describe(token: Option<Token<'_>>) -> String {
    match token {
        Some(t) => t.to_string(),
        None => END_OF_INPUT.to_owned(),
    }
}
