//! Token classification for infix expressions
//!
//! Every token is exactly one character. Operands are single alphanumeric
//! characters, operators are `+ - * /`, and `=` marks the end of both infix
//! and postfix expressions.

use std::fmt;

/// Character that terminates every expression
pub const END_MARKER: char = '=';

/// Binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Binding strength: `*` and `/` outrank `+` and `-`
    pub fn priority(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A classified input character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Operand(char),
    Operator(Operator),
    LeftParen,
    RightParen,
    End,
}

impl Token {
    /// Classify a character, `None` if it is outside the expression alphabet
    pub fn classify(c: char) -> Option<Self> {
        match c {
            '0'..='9' | 'a'..='z' | 'A'..='Z' => Some(Token::Operand(c)),
            '(' => Some(Token::LeftParen),
            ')' => Some(Token::RightParen),
            END_MARKER => Some(Token::End),
            _ => Operator::from_char(c).map(Token::Operator),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Token::Operand(c) => c,
            Token::Operator(op) => op.symbol(),
            Token::LeftParen => '(',
            Token::RightParen => ')',
            Token::End => END_MARKER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_operands() {
        for c in ['0', '9', 'a', 'z', 'A', 'Z'] {
            assert_eq!(Token::classify(c), Some(Token::Operand(c)));
        }
    }

    #[test]
    fn test_classify_punctuation() {
        assert_eq!(Token::classify('('), Some(Token::LeftParen));
        assert_eq!(Token::classify(')'), Some(Token::RightParen));
        assert_eq!(Token::classify('='), Some(Token::End));
        assert_eq!(Token::classify('*'), Some(Token::Operator(Operator::Mul)));
    }

    #[test]
    fn test_classify_rejects_other_characters() {
        assert_eq!(Token::classify(' '), None);
        assert_eq!(Token::classify('%'), None);
        assert_eq!(Token::classify('_'), None);
        assert_eq!(Token::classify('é'), None);
    }

    #[test]
    fn test_priorities() {
        assert_eq!(Operator::Add.priority(), Operator::Sub.priority());
        assert_eq!(Operator::Mul.priority(), Operator::Div.priority());
        assert!(Operator::Mul.priority() > Operator::Add.priority());
    }

    #[test]
    fn test_as_char_matches_classify() {
        for c in "a+b-c*d/e()=".chars() {
            let token = Token::classify(c).unwrap();
            assert_eq!(token.as_char(), c);
        }
    }
}
