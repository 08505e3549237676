use std::{collections::BTreeMap, fmt};

use itertools::Itertools;
use parser::literal::Literal;

/// Heterogeneous element used by the literal sources and the flattening
/// adapter. `Display` writes the literal syntax the `parser` crate reads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Value {
    Int(i64),
    Text(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }
}

impl From<i64> for Value {
    fn from(int: i64) -> Self {
        Value::Int(int)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Int(int) => Value::Int(int),
            Literal::Text(text) => Value::Text(text),
            Literal::Bytes(bytes) => Value::Bytes(bytes),
            Literal::List(items) => Value::List(items.into_iter().map(Value::from).collect()),
            // Later duplicates win.
            Literal::Map(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.0.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\t' => f.write_str("\\t")?,
                c => write!(f, "{}", c)?,
            }
        }
        f.write_str("\"")
    }
}

/// Printable ASCII as is, everything else as `\xNN`.
struct QuotedBytes<'a>(&'a [u8]);

impl fmt::Display for QuotedBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("b\"")?;
        for &byte in self.0 {
            match byte {
                b'"' => f.write_str("\\\"")?,
                b'\\' => f.write_str("\\\\")?,
                b'\n' => f.write_str("\\n")?,
                b'\t' => f.write_str("\\t")?,
                0x20..=0x7e => write!(f, "{}", byte as char)?,
                _ => write!(f, "\\x{:02x}", byte)?,
            }
        }
        f.write_str("\"")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Int(int) => write!(f, "{}", int),
            Value::Text(text) => write!(f, "{}", Quoted(text)),
            Value::Bytes(bytes) => write!(f, "{}", QuotedBytes(bytes)),
            Value::List(items) => write!(f, "[{}]", items.iter().format(", ")),
            Value::Map(entries) => write!(
                f,
                "{{{}}}",
                entries
                    .iter()
                    .format_with(", ", |(key, value), f| f(&format_args!(
                        "{}: {}",
                        Quoted(key),
                        value
                    )))
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use parser::literal::parse_literal;

    use super::*;

    #[test]
    fn display_uses_literal_syntax() {
        let value = Value::List(vec![
            Value::Int(-3),
            Value::from("a \"b\"\n"),
            Value::Bytes(b"xy".to_vec()),
            Value::Map(BTreeMap::from([("k".to_owned(), Value::List(vec![]))])),
        ]);
        assert_eq!(
            value.to_string(),
            r#"[-3, "a \"b\"\n", b"xy", {"k": []}]"#
        );
    }

    #[test]
    fn from_literal_round_trip() {
        let raw = r#"[1, [b"z", "t\\"], {"a": 1, "b": [2]}]"#;
        let value = Value::from(parse_literal(raw).unwrap());
        assert_eq!(value.to_string(), raw);
    }

    #[test]
    fn bytes_survive_round_trip() {
        let value = Value::Bytes(vec![0xff, b'a', 0x00, b'"', b'\\', 0xc3, 0xa9]);
        assert_eq!(value.to_string(), r#"b"\xffa\x00\"\\\xc3\xa9""#);
        assert_eq!(Value::from(parse_literal(&value.to_string()).unwrap()), value);
    }

    #[test]
    fn duplicate_map_keys_keep_last() {
        let value = Value::from(parse_literal(r#"{"a": 1, "a": 2}"#).unwrap());
        assert_eq!(value.to_string(), r#"{"a": 2}"#);
    }
}
