//! Source literals
//!
//! A small value tree that renders as a JavaScript, Python or JSON literal.
//! Multi-line containers put one entry per line; empty containers stay inline.

use serde_json::Value;

/// Literal syntax of a target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Single quotes, bare identifier keys, two-space indent, trailing commas.
    JavaScript,
    /// Single quotes, `None`/`True`/`False`, four-space indent, trailing commas.
    Python,
    /// Double quotes, four-space indent.
    Json,
}

impl Style {
    fn indent(&self) -> &'static str {
        match self {
            Style::JavaScript => "  ",
            Style::Python | Style::Json => "    ",
        }
    }

    fn trailing_comma(&self) -> bool { !matches!(self, Style::Json) }

    fn keyword(&self, value: Option<bool>) -> &'static str {
        match (self, value) {
            (Style::Python, None) => "None",
            (Style::Python, Some(true)) => "True",
            (Style::Python, Some(false)) => "False",
            (_, None) => "null",
            (_, Some(true)) => "true",
            (_, Some(false)) => "false",
        }
    }

    fn quote(&self, text: &str) -> String {
        match self {
            Style::Json => Value::String(text.to_string()).to_string(),
            Style::JavaScript | Style::Python => {
                let mut out = String::with_capacity(text.len() + 2);
                out.push('\'');
                for c in text.chars() {
                    match c {
                        '\\' => out.push_str("\\\\"),
                        '\'' => out.push_str("\\'"),
                        '\n' => out.push_str("\\n"),
                        _ => out.push(c),
                    }
                }
                out.push('\'');
                out
            }
        }
    }

    fn key(&self, key: &str) -> String {
        match self {
            Style::JavaScript if is_identifier(key) => key.to_string(),
            _ => self.quote(key),
        }
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// A renderable literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// `null` / `None`
    Null,
    /// Boolean
    Bool(bool),
    /// Number, emitted verbatim.
    Num(String),
    /// Number emitted as a JavaScript bigint (`123n`); a plain number elsewhere.
    BigInt(String),
    /// Quoted string
    Str(String),
    /// List
    List(Vec<Literal>),
    /// Ordered key/value pairs
    Map(Vec<(String, Literal)>),
}

impl Literal {
    /// Quoted string literal.
    pub fn string(text: &str) -> Self { Literal::Str(text.to_string()) }

    /// Decimal text as a number; anything else stays a string.
    pub fn number(text: &str) -> Self {
        match decimal(text) {
            Some(n) => Literal::Num(n),
            None => Literal::string(text),
        }
    }

    /// Decimal text as a bigint; anything else stays a string.
    pub fn bigint(text: &str) -> Self {
        match decimal(text) {
            Some(n) => Literal::BigInt(n),
            None => Literal::string(text),
        }
    }

    /// Decimal text as a `0x` hex quantity string; anything else stays a string.
    pub fn hex_quantity(text: &str) -> Self {
        match decimal(text).and_then(|n| n.parse::<u128>().ok()) {
            Some(n) => Literal::Str(format!("{:#x}", n)),
            None => Literal::string(text),
        }
    }

    /// Mirror a JSON value, with decimal strings (also inside lists) as numbers.
    pub fn numeric(value: &Value) -> Self {
        match value {
            Value::String(s) => Literal::number(s),
            Value::Array(items) => Literal::List(items.iter().map(Literal::numeric).collect()),
            other => Literal::from_value(other),
        }
    }

    /// Mirror a JSON value. Strings stay strings.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Literal::Null,
            Value::Bool(b) => Literal::Bool(*b),
            Value::Number(n) => Literal::Num(n.to_string()),
            Value::String(s) => Literal::string(s),
            Value::Array(items) => Literal::List(items.iter().map(Literal::from_value).collect()),
            Value::Object(map) => {
                Literal::Map(map.iter().map(|(k, v)| (k.clone(), Literal::from_value(v))).collect())
            }
        }
    }

    /// Render at nesting `level`; the first line carries no indentation.
    pub fn render(&self, style: Style, level: usize) -> String {
        match self {
            Literal::Null => style.keyword(None).to_string(),
            Literal::Bool(b) => style.keyword(Some(*b)).to_string(),
            Literal::Num(n) => n.clone(),
            Literal::BigInt(n) if style == Style::JavaScript => format!("{}n", n),
            Literal::BigInt(n) => n.clone(),
            Literal::Str(s) => style.quote(s),
            Literal::List(items) => {
                let entries = items.iter().map(|i| i.render(style, level + 1)).collect();
                block(style, level, "[", "]", entries)
            }
            Literal::Map(fields) => {
                let entries = fields
                    .iter()
                    .map(|(k, v)| format!("{}: {}", style.key(k), v.render(style, level + 1)))
                    .collect();
                block(style, level, "{", "}", entries)
            }
        }
    }
}

fn block(style: Style, level: usize, open: &str, close: &str, entries: Vec<String>) -> String {
    if entries.is_empty() {
        return format!("{}{}", open, close);
    }
    let inner = style.indent().repeat(level + 1);
    let last = entries.len() - 1;
    let mut out = String::from(open);
    for (i, entry) in entries.into_iter().enumerate() {
        out.push('\n');
        out.push_str(&inner);
        out.push_str(&entry);
        if i < last || style.trailing_comma() {
            out.push(',');
        }
    }
    out.push('\n');
    out.push_str(&style.indent().repeat(level));
    out.push_str(close);
    out
}

/// Canonical decimal text (leading zeros stripped), if `text` is one.
fn decimal(text: &str) -> Option<String> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let trimmed = text.trim_start_matches('0');
    Some(if trimmed.is_empty() { "0".to_string() } else { trimmed.to_string() })
}
