use std::fmt::{self, Write as _};

/// Regex used for a parameter declared without one.
pub const DEFAULT_PARAMETER_REGEX: &str = "[^/]+";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Literal(Literal),
    Parameter(Parameter),
    Optional(Sequence),
}

/// Verbatim text. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    text: Box<str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: Box<str>,
    regex: Option<Box<str>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    children: Vec<Node>,
}

impl Literal {
    /// Returns `None` for empty text.
    pub fn new(text: impl Into<Box<str>>) -> Option<Self> {
        let text = text.into();
        if text.is_empty() {
            None
        } else {
            Some(Self { text })
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn write_regex(&self, buf: &mut String) {
        buf.push_str(&regex::escape(&self.text));
    }
}

impl Parameter {
    pub fn new(name: impl Into<Box<str>>, regex: Option<Box<str>>) -> Self {
        Self {
            name: name.into(),
            regex,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared regex, `None` for `{name}`.
    pub fn regex(&self) -> Option<&str> {
        self.regex.as_deref()
    }

    pub fn is_constrained(&self) -> bool {
        self.regex.is_some()
    }

    pub fn write_regex(&self, buf: &mut String) {
        let re = self.regex().unwrap_or(DEFAULT_PARAMETER_REGEX);
        let _ = write!(buf, "(?P<{}>{})", self.name, re);
    }
}

impl Sequence {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn into_children(self) -> Vec<Node> {
        self.children
    }

    pub fn write_regex(&self, buf: &mut String) {
        write_nodes_regex(&self.children, buf)
    }

    pub fn to_regex(&self) -> String {
        let mut buf = String::new();
        self.write_regex(&mut buf);
        buf
    }
}

impl Node {
    pub fn write_regex(&self, buf: &mut String) {
        match self {
            Self::Literal(lit) => lit.write_regex(buf),
            Self::Parameter(param) => param.write_regex(buf),
            Self::Optional(seq) => {
                buf.push_str("(?:");
                seq.write_regex(buf);
                buf.push_str(")?");
            }
        }
    }

    pub fn to_regex(&self) -> String {
        let mut buf = String::new();
        self.write_regex(&mut buf);
        buf
    }
}

pub fn write_nodes_regex(nodes: &[Node], buf: &mut String) {
    for node in nodes {
        node.write_regex(buf)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('\'')?;
        for c in self.text.chars() {
            if c == '\\' || c == '\'' {
                f.write_char('\\')?;
            }
            f.write_char(c)?;
        }
        f.write_char('\'')
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.regex {
            None => write!(f, "{{{}}}", self.name),
            Some(ref re) => write!(f, "{{{}: #{}#}}", self.name, re),
        }
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(child, f)?;
        }
        f.write_char(']')
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(lit) => fmt::Display::fmt(lit, f),
            Self::Parameter(param) => fmt::Display::fmt(param, f),
            Self::Optional(seq) => write!(f, "?{}", seq),
        }
    }
}

impl From<Literal> for Node {
    fn from(x: Literal) -> Self {
        Self::Literal(x)
    }
}

impl From<Parameter> for Node {
    fn from(x: Parameter) -> Self {
        Self::Parameter(x)
    }
}
