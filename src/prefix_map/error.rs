use crate::pattern::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("invalid route pattern {pattern:?}: {source}")]
    Parse {
        pattern: String,
        #[source]
        source: ParseError,
    },

    #[error("invalid regex {fragment:?} in route pattern {pattern:?}: {source}")]
    Regex {
        pattern: String,
        fragment: String,
        #[source]
        source: regex::Error,
    },

    #[error("route pattern {pattern:?} duplicates an earlier route")]
    Duplicate { pattern: String },

    #[error("route cache i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("route cache entry is malformed: {0}")]
    Json(#[from] serde_json::Error),
}
