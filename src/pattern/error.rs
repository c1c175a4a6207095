#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected parameter to start with a name, got {found}")]
    ExpectedParameterName { found: String },

    #[error("expected parameter name {name:?} to be followed by \"}}\" or \":\", got {found}")]
    ExpectedColonOrCloseBrace { name: String, found: String },

    #[error("got \"{open}\" without \"{close}\"")]
    Unclosed {
        open: &'static str,
        close: &'static str,
    },

    #[error("unexpected token: {found}")]
    UnexpectedToken { found: String },

    #[error("tokens remaining at end of expression: {remaining}")]
    TrailingTokens { remaining: String },
}
