use super::{Error, LineNumber};
use crate::error;
use std::convert::TryFrom;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Whitespace(usize),
    Literal(String),
    Word(Word),
    Operator(Operator),
    Ident(String),
    LParen,
    RParen,
}

impl Token {
    pub fn from_string(s: &str) -> Option<Token> {
        if let Some(word) = Word::from_string(s) {
            return Some(Token::Word(word));
        }
        if let Some(op) = Operator::from_string(s) {
            return Some(Token::Operator(op));
        }
        match s {
            "(" => Some(Token::LParen),
            ")" => Some(Token::RParen),
            _ => None,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace(_))
    }

    pub fn is_comparator(&self) -> bool {
        use Operator::*;
        matches!(self, Token::Operator(Equal) | Token::Operator(Less) | Token::Operator(Greater))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Whitespace(u) => write!(f, "{s:>w$}", s = "", w = u),
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
        }
    }
}

impl TryFrom<&Token> for LineNumber {
    type Error = Error;
    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        let msg = "INVALID LINE NUMBER";
        if let Token::Literal(s) = token {
            if s.chars().all(|c| c.is_ascii_digit()) {
                if let Ok(line) = s.parse::<LineNumber>() {
                    return Ok(line);
                }
                return Err(error!(Overflow; msg));
            }
        }
        Err(error!(SyntaxError; msg))
    }
}

/// The reserved command vocabulary. None of these may name a variable.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Clear,
    End,
    Goto,
    Help,
    If,
    Input,
    Let,
    List,
    Print,
    Quit,
    Rem,
    Run,
    Then,
}

impl Word {
    pub const ALL: [Word; 13] = [
        Word::Clear,
        Word::End,
        Word::Goto,
        Word::Help,
        Word::If,
        Word::Input,
        Word::Let,
        Word::List,
        Word::Print,
        Word::Quit,
        Word::Rem,
        Word::Run,
        Word::Then,
    ];

    pub fn from_string(s: &str) -> Option<Word> {
        Word::ALL.iter().find(|w| w.to_string() == s).copied()
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Clear => write!(f, "CLEAR"),
            End => write!(f, "END"),
            Goto => write!(f, "GOTO"),
            Help => write!(f, "HELP"),
            If => write!(f, "IF"),
            Input => write!(f, "INPUT"),
            Let => write!(f, "LET"),
            List => write!(f, "LIST"),
            Print => write!(f, "PRINT"),
            Quit => write!(f, "QUIT"),
            Rem => write!(f, "REM"),
            Run => write!(f, "RUN"),
            Then => write!(f, "THEN"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Multiply,
    Divide,
    Plus,
    Minus,
    Equal,
    Less,
    Greater,
}

impl Operator {
    pub fn from_string(s: &str) -> Option<Operator> {
        use Operator::*;
        match s {
            "*" => Some(Multiply),
            "/" => Some(Divide),
            "+" => Some(Plus),
            "-" => Some(Minus),
            "=" => Some(Equal),
            "<" => Some(Less),
            ">" => Some(Greater),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Equal => write!(f, "="),
            Less => write!(f, "<"),
            Greater => write!(f, ">"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let t = Token::from_string("REM");
        assert_eq!(t, Some(Token::Word(Word::Rem)));
        let t = Token::from_string("<");
        assert_eq!(t, Some(Token::Operator(Operator::Less)));
        let t = Token::from_string("PICKLES");
        assert_eq!(t, None);
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(Word::from_string("THEN"), Some(Word::Then));
        assert_eq!(Word::from_string("then"), None);
    }

    #[test]
    fn test_line_number_from_token() {
        let t = Token::Literal("120".to_string());
        assert_eq!(LineNumber::try_from(&t), Ok(120));
        let t = Token::Literal("99999999999999".to_string());
        assert_eq!(
            LineNumber::try_from(&t).map_err(|e| e.code()),
            Err(crate::lang::ErrorCode::Overflow)
        );
        let t = Token::Ident("A".to_string());
        assert!(LineNumber::try_from(&t).is_err());
    }
}
