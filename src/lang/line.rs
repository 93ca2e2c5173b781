use super::ast::Command;
use super::lex::*;
use super::parse::*;
use super::token::*;
use super::{Error, LineNumber};

/// One line as the user typed it, with its line number split off.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: Option<LineNumber>,
    source: String,
    tokens: Vec<Token>,
}

impl Line {
    pub fn new(s: &str) -> Line {
        let source = s.trim().to_string();
        let (number, tokens) = lex(&source);
        Line {
            number,
            source,
            tokens,
        }
    }

    pub fn number(&self) -> Option<LineNumber> {
        self.number
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn ast(&self) -> Result<Command, Error> {
        parse(self.number, &self.tokens)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
