use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct LiteralParser;

/// Nested literal as written in source text, e.g. `[[], [[]], 5]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Int(i64),
    Text(String),
    Bytes(Vec<u8>),
    List(Vec<Literal>),
    /// Entries in source order; duplicate keys are kept.
    Map(Vec<(String, Literal)>),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed literal\n{0}")]
    Syntax(#[from] Box<pest::error::Error<Rule>>),
    #[error("integer literal `{0}` does not fit in 64 bits")]
    IntRange(String),
}

pub fn parse_literal(raw_literal: &str) -> Result<Literal, ParseError> {
    let file = LiteralParser::parse(Rule::file, raw_literal)
        .map_err(Box::new)?
        .next()
        .map(Pair::into_inner);
    // `file` is SOI ~ value ~ EOI, so its first inner pair is the value.
    match file.and_then(|mut inner_rules| inner_rules.next()) {
        Some(pair) => build_ast_literal(pair),
        None => unreachable!("grammar always yields a value"),
    }
}

fn build_ast_literal(pair: Pair<Rule>) -> Result<Literal, ParseError> {
    let literal = match pair.as_rule() {
        Rule::int => {
            let raw = pair.as_str();
            Literal::Int(
                raw.parse()
                    .map_err(|_| ParseError::IntRange(raw.to_owned()))?,
            )
        }
        Rule::text => Literal::Text(unquote(pair.as_str())),
        Rule::bytes => Literal::Bytes(unquote_bytes(&pair.as_str()[1..])),
        Rule::list => Literal::List(
            pair.into_inner()
                .map(build_ast_literal)
                .collect::<Result<_, _>>()?,
        ),
        Rule::map => Literal::Map(
            pair.into_inner()
                .map(build_ast_entry)
                .collect::<Result<_, _>>()?,
        ),
        _ => unreachable!(),
    };
    Ok(literal)
}

fn build_ast_entry(pair: Pair<Rule>) -> Result<(String, Literal), ParseError> {
    let mut inner_rules = pair.into_inner();
    match (inner_rules.next(), inner_rules.next()) {
        (Some(key), Some(value)) => Ok((unquote(key.as_str()), build_ast_literal(value)?)),
        _ => unreachable!("pair is text ~ \":\" ~ value"),
    }
}

/// Strips the surrounding quotes and resolves `\"`, `\\`, `\n` and `\t`.
fn unquote(quoted: &str) -> String {
    let body = &quoted[1..quoted.len() - 1];
    let mut res = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            res.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => res.push('\n'),
            Some('t') => res.push('\t'),
            Some(escaped) => res.push(escaped),
            None => {}
        }
    }
    res
}

/// Like [`unquote`], plus `\xNN` for arbitrary bytes.
fn unquote_bytes(quoted: &str) -> Vec<u8> {
    let body = &quoted[1..quoted.len() - 1];
    let mut res = Vec::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            let mut buf = [0; 4];
            res.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }
        match chars.next() {
            Some('n') => res.push(b'\n'),
            Some('t') => res.push(b'\t'),
            Some('x') => {
                let hi = chars.next().and_then(|c| c.to_digit(16));
                let lo = chars.next().and_then(|c| c.to_digit(16));
                if let (Some(hi), Some(lo)) = (hi, lo) {
                    res.push((hi << 4 | lo) as u8);
                }
            }
            Some(escaped) => res.push(escaped as u8),
            None => {}
        }
    }
    res
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn nested_lists() {
        assert_eq!(
            parse_literal("[[], [[]], 5]").unwrap(),
            Literal::List(vec![
                Literal::List(vec![]),
                Literal::List(vec![Literal::List(vec![])]),
                Literal::Int(5),
            ])
        );
    }

    #[test]
    fn heterogeneous_values() {
        assert_eq!(
            parse_literal(r#"[3, -2, "lift\"off\n", b"ab", {"k": [1], "j": "v"},]"#).unwrap(),
            Literal::List(vec![
                Literal::Int(3),
                Literal::Int(-2),
                Literal::Text("lift\"off\n".to_owned()),
                Literal::Bytes(b"ab".to_vec()),
                Literal::Map(vec![
                    ("k".to_owned(), Literal::List(vec![Literal::Int(1)])),
                    ("j".to_owned(), Literal::Text("v".to_owned())),
                ]),
            ])
        );
    }

    #[test]
    fn scalar_at_top_level() {
        assert_eq!(parse_literal("  42 ").unwrap(), Literal::Int(42));
        assert_eq!(
            parse_literal(r#""a\\b""#).unwrap(),
            Literal::Text("a\\b".to_owned())
        );
    }

    #[test]
    fn hex_escapes_in_bytes() {
        assert_eq!(
            parse_literal(r#"b"\xff\x00a\"é""#).unwrap(),
            Literal::Bytes(vec![0xff, 0x00, b'a', b'"', 0xc3, 0xa9])
        );
    }

    #[test]
    fn int_out_of_range() {
        assert!(matches!(
            parse_literal("[99999999999999999999]"),
            Err(ParseError::IntRange(raw)) if raw == "99999999999999999999"
        ));
    }

    #[test_case("" ; "empty input")]
    #[test_case("[1, 2" ; "unclosed list")]
    #[test_case("[1 2]" ; "missing comma")]
    #[test_case(r#"{1: 2}"# ; "non text key")]
    #[test_case(r#""\q""# ; "unknown escape")]
    #[test_case("[1] [2]" ; "trailing input")]
    #[test_case(r#""\x41""# ; "hex escape outside bytes")]
    #[test_case(r#"b"\xf""# ; "short hex escape")]
    fn syntax_errors(raw: &str) {
        assert!(matches!(parse_literal(raw), Err(ParseError::Syntax(_))));
    }
}
