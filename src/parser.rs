use crate::error::CombinatoricsError;
use nom::{
    branch::alt,
    character::complete::{char, digit1, multispace0},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::{delimited, pair},
    IResult,
};

/// Parse an optional leading sign
fn sign(input: &str) -> IResult<&str, char> {
    alt((char('+'), char('-')))(input)
}

/// Parse a signed decimal integer that fits in an i64
fn signed_integer(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(sign), digit1)), |s: &str| s.parse::<i64>())(input)
}

/// Parse a whole operand string, allowing surrounding whitespace
fn operand(input: &str) -> IResult<&str, i64> {
    all_consuming(delimited(multispace0, signed_integer, multispace0))(input)
}

/// Parse a numeric operand such as `"12"`, `" -3 "` or `"+7"`.
///
/// Fails with [`CombinatoricsError::NotNumeric`] for anything else, including
/// fractional literals and values outside the `i64` range.
pub fn parse_operand(input: &str) -> Result<i64, CombinatoricsError> {
    match operand(input) {
        Ok((_, value)) => Ok(value),
        Err(_) => Err(CombinatoricsError::NotNumeric {
            input: input.to_string(),
        }),
    }
}
