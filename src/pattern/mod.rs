//! Route pattern syntax.
//!
//! ```text
//! sequence  := (literal | parameter | optional)*
//! parameter := '{' name (':' regex)? '}'
//! optional  := '[' sequence ']'
//! ```

mod error;
mod node;
mod parser;
mod token;

pub use self::error::ParseError;
pub use self::node::{Literal, Node, Parameter, Sequence, DEFAULT_PARAMETER_REGEX};
pub use self::parser::parse;
pub use self::token::{tokenize, Token, TokenKind};

pub(crate) use self::node::write_nodes_regex;
