//! Justification spec parsing and per-column resolution.
//!
//! A spec string holds one comma-separated token per column: `L`
//! left-justifies, `R` right-justifies, and a run of spaces is a literal
//! spacer placed between two columns without consuming a column index.
//! A spec shorter than the table repeats its last alignment token for
//! the remaining columns, so `"L,R"` covers a table of any width.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-justify (pad on the right).
    #[default]
    Left,
    /// Right-justify (pad on the left).
    Right,
}

/// One parsed token of a justification spec.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Token {
    /// Consume the next data column with the given alignment.
    Align(Align),
    /// Emit the literal run of spaces; the column index does not advance.
    Spacer(String),
}

/// A parsed, validated justification spec.
///
/// # Example
///
/// ```rust
/// use columnize::JustifySpec;
///
/// assert!(JustifySpec::parse("L,R,   ,R").is_ok());
/// assert!(JustifySpec::parse("L,Q").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JustifySpec {
    tokens: Vec<Token>,
}

impl Default for JustifySpec {
    /// The `"L,R"` spec: first column left, every later column right.
    fn default() -> Self {
        JustifySpec {
            tokens: vec![Token::Align(Align::Left), Token::Align(Align::Right)],
        }
    }
}

impl JustifySpec {
    /// Parse a comma-separated spec string.
    ///
    /// Accepts `L`, `R`, and runs of one or more spaces. Any other
    /// token is fatal, empty tokens and tabs included, as is a spec
    /// with no `L` or `R` at all: there would be nothing to align with
    /// or repeat.
    pub fn parse(spec: &str) -> Result<Self, Error> {
        let mut tokens = Vec::new();
        for token in spec.split(',') {
            match token {
                "L" => tokens.push(Token::Align(Align::Left)),
                "R" => tokens.push(Token::Align(Align::Right)),
                t if !t.is_empty() && t.chars().all(|c| c == ' ') => {
                    tokens.push(Token::Spacer(t.to_string()))
                }
                t => return Err(Error::InvalidJustifyToken(t.to_string())),
            }
        }
        if !tokens.iter().any(|t| matches!(t, Token::Align(_))) {
            return Err(Error::NoJustifyToken(spec.to_string()));
        }
        Ok(JustifySpec { tokens })
    }

    /// Expand the tokens into a render plan covering `columns` data
    /// columns.
    ///
    /// The last alignment token repeats once the spec runs short; tokens
    /// past the final column are dropped.
    pub(crate) fn resolve(&self, columns: usize) -> Vec<Token> {
        let mut plan = Vec::with_capacity(columns);
        let mut consumed = 0;
        let mut last_align = Align::default();
        let mut tokens = self.tokens.iter();
        while consumed < columns {
            match tokens.next() {
                Some(Token::Align(align)) => {
                    plan.push(Token::Align(*align));
                    last_align = *align;
                    consumed += 1;
                }
                Some(Token::Spacer(gap)) => plan.push(Token::Spacer(gap.clone())),
                None => {
                    // Parsing guarantees an alignment token, so by
                    // exhaustion last_align has been seen.
                    plan.push(Token::Align(last_align));
                    consumed += 1;
                }
            }
        }
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aligns(plan: &[Token]) -> Vec<Align> {
        plan.iter()
            .filter_map(|t| match t {
                Token::Align(a) => Some(*a),
                Token::Spacer(_) => None,
            })
            .collect()
    }

    // --- parse tests ---

    #[test]
    fn parses_alignments_and_spacers() {
        let spec = JustifySpec::parse("L,R,   ,R").unwrap();
        assert_eq!(
            spec.tokens,
            vec![
                Token::Align(Align::Left),
                Token::Align(Align::Right),
                Token::Spacer("   ".to_string()),
                Token::Align(Align::Right),
            ]
        );
    }

    #[test]
    fn rejects_unknown_token() {
        let err = JustifySpec::parse("L,Q").unwrap_err();
        assert!(matches!(err, Error::InvalidJustifyToken(t) if t == "Q"));
    }

    #[test]
    fn rejects_empty_tokens() {
        let err = JustifySpec::parse("L,,R").unwrap_err();
        assert!(matches!(err, Error::InvalidJustifyToken(t) if t.is_empty()));
        assert!(matches!(
            JustifySpec::parse("").unwrap_err(),
            Error::InvalidJustifyToken(t) if t.is_empty()
        ));
    }

    #[test]
    fn spacers_are_spaces_only() {
        let err = JustifySpec::parse("L,\t,R").unwrap_err();
        assert!(matches!(err, Error::InvalidJustifyToken(t) if t == "\t"));
        assert!(JustifySpec::parse("L, \u{a0} ,R").is_err());
    }

    #[test]
    fn rejects_lowercase_tokens() {
        assert!(JustifySpec::parse("l,r").is_err());
    }

    #[test]
    fn default_spec_is_left_then_right() {
        assert_eq!(JustifySpec::default(), JustifySpec::parse("L,R").unwrap());
    }

    #[test]
    fn rejects_spec_without_alignment() {
        // A lone spacer parses token-by-token but leaves nothing to
        // align with or repeat.
        assert!(matches!(
            JustifySpec::parse("   ").unwrap_err(),
            Error::NoJustifyToken(_)
        ));
        assert!(matches!(
            JustifySpec::parse(" ,  ").unwrap_err(),
            Error::NoJustifyToken(_)
        ));
    }

    // --- serde tests ---

    #[test]
    fn align_serde_roundtrip() {
        for align in [Align::Left, Align::Right] {
            let json = serde_json::to_string(&align).unwrap();
            let parsed: Align = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, align);
        }
        assert_eq!(serde_json::to_string(&Align::Left).unwrap(), "\"left\"");
    }

    // --- resolve tests ---

    #[test]
    fn repeats_last_alignment_for_extra_columns() {
        let spec = JustifySpec::parse("L,R").unwrap();
        assert_eq!(
            aligns(&spec.resolve(4)),
            vec![Align::Left, Align::Right, Align::Right, Align::Right]
        );
    }

    #[test]
    fn spacer_does_not_consume_a_column() {
        // Five alignment tokens plus one spacer: column six repeats R.
        let spec = JustifySpec::parse("L,R,R,L,   ,R").unwrap();
        let plan = spec.resolve(6);
        assert_eq!(
            aligns(&plan),
            vec![
                Align::Left,
                Align::Right,
                Align::Right,
                Align::Left,
                Align::Right,
                Align::Right,
            ]
        );
        assert_eq!(plan[4], Token::Spacer("   ".to_string()));
    }

    #[test]
    fn carries_alignment_past_a_trailing_spacer() {
        let spec = JustifySpec::parse("L,   ").unwrap();
        assert_eq!(aligns(&spec.resolve(3)), vec![Align::Left; 3]);
    }

    #[test]
    fn drops_tokens_past_the_last_column() {
        let spec = JustifySpec::parse("L,R,R,  ,L").unwrap();
        let plan = spec.resolve(2);
        assert_eq!(plan, vec![Token::Align(Align::Left), Token::Align(Align::Right)]);
    }

    #[test]
    fn zero_columns_resolve_to_an_empty_plan() {
        let spec = JustifySpec::parse("L,R").unwrap();
        assert!(spec.resolve(0).is_empty());
    }
}
