/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Parsing of surd expressions.
//!
//! Accepted grammar (whitespace may separate tokens):
//!
//! ```text
//! expr   := ['+'|'-'] term (('+'|'-') term)*
//! term   := unary (('*'|'/') unary)*
//! unary  := ['+'|'-'] atom
//! atom   := number | 'sqrt' '(' expr ')' | '(' expr ')'
//! number := digits ['.' digits] [('e'|'E') ['+'|'-'] digits]
//! ```
//!
//! Decimal literals are read exactly, so `"0.1"` is one tenth, not the
//! nearest binary float.  Written exponents are limited to
//! `±`[`MAX_EXPONENT`].

use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{pow, Zero};

use crate::Surd;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseSurdError {
    #[error("unexpected character {found:?} at position {pos}")]
    UnexpectedChar { pos: usize, found: char },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("malformed number {0:?}")]
    BadNumber(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("square root of {0} is not expressible as a surd")]
    NotRepresentable(String),

    #[error("not a finite number: {0}")]
    NonFinite(f64),
}

impl FromStr for Surd {
    type Err = ParseSurdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let mut parser = Parser { chars: &chars, pos: 0 };
        let value = parser.expr()?;
        match parser.peek() {
            None => Ok(value),
            Some(found) => Err(ParseSurdError::UnexpectedChar { pos: parser.pos, found }),
        }
    }
}

impl Surd {
    /// Read a float through its shortest decimal representation.
    ///
    /// `0.1f64` becomes exactly `1/10`.  This is what a user who wrote `0.1`
    /// in an input file meant.
    pub fn from_f64_decimal(x: f64) -> Result<Surd, ParseSurdError> {
        if !x.is_finite() {
            return Err(ParseSurdError::NonFinite(x));
        }
        // Display for f64 never uses exponent notation, and round-trips.
        format!("{}", x).parse()
    }
}

/// Largest decimal exponent accepted in a number literal.  The value is
/// stored exactly, so `1e100000000` would mean a hundred-million-digit
/// integer.
pub const MAX_EXPONENT: i64 = 4096;

struct Parser<'a> {
    chars: &'a [char],
    pos: usize,
}

impl<'a> Parser<'a> {
    // Whitespace separates tokens but is otherwise ignored.
    fn peek(&mut self) -> Option<char> {
        while self.peek_raw().map_or(false, char::is_whitespace) {
            self.pos += 1;
        }
        self.peek_raw()
    }

    fn peek_raw(&self) -> Option<char>
    { self.chars.get(self.pos).cloned() }

    fn eat(&mut self, c: char) -> bool {
        match self.peek() == Some(c) {
            true => { self.pos += 1; true },
            false => false,
        }
    }

    fn expect(&mut self, c: char) -> Result<(), ParseSurdError> {
        match self.peek() {
            Some(found) if found == c => { self.pos += 1; Ok(()) },
            Some(found) => Err(ParseSurdError::UnexpectedChar { pos: self.pos, found }),
            None => Err(ParseSurdError::UnexpectedEnd),
        }
    }

    fn expr(&mut self) -> Result<Surd, ParseSurdError> {
        let mut acc = self.term()?;
        loop {
            if self.eat('+') {
                acc = acc + self.term()?;
            } else if self.eat('-') {
                acc = acc - self.term()?;
            } else {
                return Ok(acc);
            }
        }
    }

    fn term(&mut self) -> Result<Surd, ParseSurdError> {
        let mut acc = self.unary()?;
        loop {
            if self.eat('*') {
                acc = acc * self.unary()?;
            } else if self.eat('/') {
                let divisor = self.unary()?;
                acc = acc.checked_div(&divisor).ok_or(ParseSurdError::DivisionByZero)?;
            } else {
                return Ok(acc);
            }
        }
    }

    fn unary(&mut self) -> Result<Surd, ParseSurdError> {
        if self.eat('-') {
            Ok(-self.unary()?)
        } else if self.eat('+') {
            self.unary()
        } else {
            self.atom()
        }
    }

    fn atom(&mut self) -> Result<Surd, ParseSurdError> {
        match self.peek() {
            None => Err(ParseSurdError::UnexpectedEnd),
            Some('(') => {
                self.pos += 1;
                let inner = self.expr()?;
                self.expect(')')?;
                Ok(inner)
            },
            Some('s') => {
                for c in "sqrt".chars() {
                    self.expect(c)?;
                }
                self.expect('(')?;
                let inner = self.expr()?;
                self.expect(')')?;
                inner.sqrt()
                    .ok_or_else(|| ParseSurdError::NotRepresentable(inner.to_string()))
            },
            Some(c) if c.is_ascii_digit() || c == '.' => self.number(),
            Some(found) => Err(ParseSurdError::UnexpectedChar { pos: self.pos, found }),
        }
    }

    fn number(&mut self) -> Result<Surd, ParseSurdError> {
        let start = self.pos;
        let mut digits = String::new();
        let mut frac_len = 0usize;
        let mut seen_point = false;

        while let Some(c) = self.peek_raw() {
            match c {
                '0'..='9' => {
                    digits.push(c);
                    if seen_point {
                        frac_len += 1;
                    }
                },
                '.' if !seen_point => seen_point = true,
                _ => break,
            }
            self.pos += 1;
        }

        let mut exponent = 0i64;
        if let Some('e') | Some('E') = self.peek_raw() {
            self.pos += 1;
            let negative = match self.peek_raw() {
                Some('-') => { self.pos += 1; true },
                Some('+') => { self.pos += 1; false },
                _ => false,
            };
            let mut exp_digits = String::new();
            while let Some(c) = self.peek_raw().filter(char::is_ascii_digit) {
                exp_digits.push(c);
                self.pos += 1;
            }
            exponent = exp_digits.parse::<i64>()
                .ok()
                .filter(|e| *e <= MAX_EXPONENT)
                .ok_or_else(|| self.bad_number(start))?;
            if negative {
                exponent = -exponent;
            }
        }

        if digits.is_empty() {
            return Err(self.bad_number(start));
        }
        let mantissa: BigInt = digits.parse().map_err(|_| self.bad_number(start))?;
        let exponent = exponent.checked_sub(frac_len as i64)
            .ok_or_else(|| self.bad_number(start))?;

        let ten = BigInt::from(10);
        let power = pow(ten, exponent.unsigned_abs() as usize);
        let value = match exponent >= 0 {
            true => BigRational::from_integer(mantissa * power),
            false => BigRational::new(mantissa, power),
        };
        Ok(Surd::from_rational(value))
    }

    fn bad_number(&self, start: usize) -> ParseSurdError {
        let text: String = self.chars[start..self.pos].iter().collect();
        ParseSurdError::BadNumber(text)
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use num_traits::One;

    fn parse(s: &str) -> Surd
    { s.parse().unwrap_or_else(|e| panic!("{:?}: {}", s, e)) }

    #[test]
    fn numbers() {
        assert_eq!(parse("3"), Surd::from_integer(3));
        assert_eq!(parse("-3"), Surd::from_integer(-3));
        assert_eq!(parse("0.25"), Surd::from_ratio(1, 4));
        assert_eq!(parse(".5"), Surd::from_ratio(1, 2));
        assert_eq!(parse("1e-3"), Surd::from_ratio(1, 1000));
        assert_eq!(parse("2.5E2"), Surd::from_integer(250));
        assert_eq!(parse("1/3"), Surd::from_ratio(1, 3));
    }

    #[test]
    fn expressions() {
        let half_root3 = parse("sqrt(3)/2");
        assert_eq!(&half_root3 * &half_root3, Surd::from_ratio(3, 4));
        assert_eq!(parse("2*sqrt(3)"), parse("sqrt(12)"));
        assert_eq!(parse("-sqrt(2)/3"), -(parse("sqrt(2)") / Surd::from_integer(3)));
        assert_eq!(parse("1 + sqrt(2) - (1 + sqrt(2))"), Surd::zero());
        assert_eq!(parse("sqrt(1/4)"), Surd::from_ratio(1, 2));
        assert_eq!(parse("sqrt(3 + 2*sqrt(2))"), parse("1 + sqrt(2)"));
        assert_eq!(parse("--1"), Surd::one());
    }

    #[test]
    fn display_round_trips() {
        for s in &["0", "-3/4", "sqrt(3)/2", "1/2 - 3*sqrt(2)/7", "7 + sqrt(2) + sqrt(30)/11"] {
            let x = parse(s);
            assert_eq!(parse(&x.to_string()), x);
        }
    }

    #[test]
    fn floats_are_read_as_decimals() {
        assert_eq!(Surd::from_f64_decimal(0.1).unwrap(), Surd::from_ratio(1, 10));
        assert_eq!(Surd::from_f64_decimal(-2.0).unwrap(), Surd::from_integer(-2));
        assert_eq!(Surd::from_f64_decimal(1e-10).unwrap(), parse("1e-10"));
        assert!(Surd::from_f64_decimal(::std::f64::NAN).is_err());
    }

    #[test]
    fn errors() {
        assert_eq!("".parse::<Surd>(), Err(ParseSurdError::UnexpectedEnd));
        assert_eq!("1/0".parse::<Surd>(), Err(ParseSurdError::DivisionByZero));
        assert_eq!("1 2".parse::<Surd>(), Err(ParseSurdError::UnexpectedChar { pos: 2, found: '2' }));
        assert_eq!("foo".parse::<Surd>(), Err(ParseSurdError::UnexpectedChar { pos: 0, found: 'f' }));
        assert_eq!("(1".parse::<Surd>(), Err(ParseSurdError::UnexpectedEnd));
        assert!(matches!("sqrt(-1)".parse::<Surd>(), Err(ParseSurdError::NotRepresentable(_))));
        assert!(matches!("sqrt(sqrt(2))".parse::<Surd>(), Err(ParseSurdError::NotRepresentable(_))));
        assert!(matches!("1e".parse::<Surd>(), Err(ParseSurdError::BadNumber(_))));
    }

    #[test]
    fn exponents_are_bounded() {
        assert_eq!(parse("1e4096") * parse("1e-4096"), Surd::one());
        assert_eq!(parse("2.5e-4096") * parse("1e4096"), Surd::from_ratio(5, 2));

        for s in &["1e4097", "1e-4097", "1e99999999999999", "3e-99999999999999", "1e99999999999999999999999"] {
            assert_eq!(
                s.parse::<Surd>(),
                Err(ParseSurdError::BadNumber(s.to_string())),
                "{}", s,
            );
        }
    }
}
