//! IQL deserializer
//!
//! Parsing runs in three passes:
//! 1. split the string into OR statements (parenthesized groups)
//! 2. split each statement into AND clauses on `&`
//! 3. split each clause on its operator token and re-type both operands
//!
//! The deserializer is lenient: it never fails, malformed pieces come back as
//! string operands.

use crate::encoding::decode;
use crate::walker::{is_quoted_at, split_top_level, Walker};
use inkly_core::{AndGroup, Clause, DeserializedExpression, Operand, Operator};
use regex::Regex;
use std::sync::OnceLock;

fn operator_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let alternatives: Vec<String> = Operator::tokens_longest_first()
            .into_iter()
            .map(regex::escape)
            .collect();
        Regex::new(&alternatives.join("|")).expect("operator tokens form a valid pattern")
    })
}

/// Parse an IQL string.
///
/// Returns `None` for an empty or blank input.
pub fn deserialize(input: &str) -> Option<DeserializedExpression> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let groups: DeserializedExpression = split_statements(input)
        .into_iter()
        .map(parse_statement)
        .collect();

    log::trace!("Deserialized {} group(s) from {:?}", groups.len(), input);
    Some(groups)
}

/// Like [`deserialize`], treating an absent input as empty
pub fn deserialize_opt(input: Option<&str>) -> Option<DeserializedExpression> {
    input.and_then(deserialize)
}

fn strip_boundary(statement: &str) -> &str {
    statement.trim_matches(|c: char| c == '(' || c == ')' || c.is_whitespace())
}

/// Every parenthesized group is a statement, even an empty one: `()` is an
/// AND over nothing and matches everything. Without parentheses the input
/// is split on top-level `|` and blank pieces are dropped.
fn split_statements(input: &str) -> Vec<&str> {
    let mut statements = Vec::new();
    let mut walker = Walker::new(input);

    while walker.advance_to('(') {
        let Some(content) = walker.read_enclosed() else { break };
        if split_top_level(content, '|').len() > 1 {
            statements.extend(split_statements(content));
        } else {
            statements.push(strip_boundary(content));
        }
    }

    if statements.is_empty() {
        statements = split_top_level(input, '|')
            .into_iter()
            .map(strip_boundary)
            .filter(|statement| !statement.is_empty())
            .collect();
    }

    statements
}

fn parse_statement(statement: &str) -> AndGroup {
    split_top_level(statement, '&')
        .into_iter()
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .map(parse_clause)
        .collect()
}

fn parse_clause(clause: &str) -> Clause {
    let found = operator_pattern()
        .find_iter(clause)
        .find(|m| !is_quoted_at(clause, m.start()));

    let Some(m) = found else {
        log::debug!("No operator in clause {:?}", clause);
        return Clause::malformed(decode(clause));
    };

    match Operator::from_token(m.as_str()) {
        Some(operator) => Clause::new(
            operator,
            retype(&clause[..m.start()]),
            retype(&clause[m.end()..]),
        ),
        None => Clause::malformed(decode(clause)),
    }
}

fn unwrap_quoted(text: &str, quote: char) -> Option<&str> {
    if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
        Some(&text[1..text.len() - 1])
    } else {
        None
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn retype(raw: &str) -> Operand {
    let decoded = decode(raw.trim());
    let decoded = decoded.as_ref();

    if let Some(inner) = unwrap_quoted(decoded, '"') {
        return Operand::String(inner.to_string());
    }
    if let Some(inner) = unwrap_quoted(decoded, '\'') {
        return Operand::Field(inner.to_string());
    }
    match decoded {
        "true" => Operand::Boolean(true),
        "false" => Operand::Boolean(false),
        _ => match parse_number(decoded) {
            Some(n) => Operand::Number(n),
            None => Operand::String(decoded.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str) -> Operand {
        Operand::Field(name.to_string())
    }

    fn string(value: &str) -> Operand {
        Operand::String(value.to_string())
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(deserialize(""), None);
        assert_eq!(deserialize(" "), None);
        assert_eq!(deserialize_opt(None), None);
    }

    #[test]
    fn test_single_clause() {
        let result = deserialize("'meta.hp'<12").unwrap();
        assert_eq!(
            result,
            vec![vec![Clause::new(Operator::LessThan, field("meta.hp"), Operand::Number(12.0))]]
        );
    }

    #[test]
    fn test_longest_token_wins() {
        let cases = [
            ("'a'<=1", Operator::LessThanOrEquals),
            ("'a'>=1", Operator::GreaterThanOrEquals),
            ("'a'!=1", Operator::NotEqual),
            ("'a'<-\"x\"", Operator::Contains),
            ("'a'<1", Operator::LessThan),
        ];
        for (input, expected) in cases {
            let result = deserialize(input).unwrap();
            assert_eq!(result[0][0].operation, Some(expected), "input {}", input);
        }
    }

    #[test]
    fn test_negative_number_is_not_contains() {
        let result = deserialize("'a'<%2D5").unwrap();
        assert_eq!(
            result[0][0],
            Clause::new(Operator::LessThan, field("a"), Operand::Number(-5.0))
        );
    }

    #[test]
    fn test_operand_typing() {
        assert_eq!(retype("\"x%20y\""), string("x y"));
        assert_eq!(retype("'name'"), field("name"));
        assert_eq!(retype("true"), Operand::Boolean(true));
        assert_eq!(retype("false"), Operand::Boolean(false));
        assert_eq!(retype("2.5"), Operand::Number(2.5));
        assert_eq!(retype("NaN"), string("NaN"));
        assert_eq!(retype("inf"), string("inf"));
        assert_eq!(retype("bare"), string("bare"));
        assert_eq!(retype("\""), string("\""));
    }

    #[test]
    fn test_nested_or_groups() {
        let result = deserialize("(('a'=1)|('b'=2))|('c'=3)").unwrap();
        let fields: Vec<_> = result
            .iter()
            .map(|group| group[0].left.as_field().unwrap().to_string())
            .collect();
        assert_eq!(fields, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unparenthesized_or() {
        let result = deserialize("'a'=1|'b'=2").unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_double_parentheses_are_stripped() {
        let result = deserialize("(('a'=1))").unwrap();
        assert_eq!(
            result,
            vec![vec![Clause::new(Operator::Equals, field("a"), Operand::Number(1.0))]]
        );
    }

    #[test]
    fn test_malformed_clause_is_kept() {
        let result = deserialize(" a").unwrap();
        assert_eq!(result, vec![vec![Clause::malformed("a")]]);
    }

    #[test]
    fn test_empty_groups_are_kept() {
        assert_eq!(deserialize("()"), Some(vec![vec![]]));
        assert_eq!(
            deserialize("()|('a'=1)"),
            Some(vec![
                vec![],
                vec![Clause::new(Operator::Equals, field("a"), Operand::Number(1.0))]
            ])
        );
        assert_eq!(deserialize("(()|('b'=2))").unwrap().len(), 2);
    }

    #[test]
    fn test_empty_clauses_and_bare_separators_are_dropped() {
        assert_eq!(deserialize("'a'=1&&").unwrap()[0].len(), 1);
        assert_eq!(deserialize("'a'=1|").unwrap().len(), 1);
    }
}
