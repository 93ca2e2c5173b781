use super::ast::{self, Command, Comparator, Expression, Ident, Statement};
use super::{token::*, Error, LineNumber};
use crate::error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// Classify a lexed line and build its command. Errors carry the line number.
pub fn parse(line_number: Option<LineNumber>, tokens: &[Token]) -> Result<Command> {
    match Parser::parse(line_number.is_none(), tokens) {
        Err(e) => Err(e.in_line_number(line_number)),
        Ok(r) => Ok(r),
    }
}

/// Parse a complete expression. Every token must be consumed.
pub fn parse_expression(tokens: &[Token]) -> Result<Expression> {
    let mut parse = Parser::new(tokens);
    let expr = parse.expression(0)?;
    parse.expect_end()?;
    Ok(expr)
}

const UNARY_PRECEDENCE: usize = 3;

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    last: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Parser<'a> {
        Parser {
            tokens,
            pos: 0,
            last: 0,
        }
    }

    fn parse(direct: bool, tokens: &'a [Token]) -> Result<Command> {
        let mut parse = Parser::new(tokens);
        let word = match parse.next() {
            Some(Token::Word(word)) => *word,
            Some(t) if direct && matches!(t, Token::Literal(_)) => {
                LineNumber::try_from(t)?;
                return Err(error!(SyntaxError));
            }
            _ => return Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        };
        if direct {
            parse.direct(word)
        } else {
            Ok(Command::Statement(parse.indirect(word)?))
        }
    }

    fn direct(&mut self, word: Word) -> Result<Command> {
        use Word::*;
        let command = match word {
            Let | Print | Input => return Ok(Command::Statement(self.statement(word)?)),
            Run => Command::Run,
            List => Command::List,
            Clear => Command::Clear,
            Quit => Command::Quit,
            Help => Command::Help,
            Rem | End | Goto | If => return Err(error!(SyntaxError; "ILLEGAL DIRECT")),
            Then => return Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        };
        self.expect_end()?;
        Ok(command)
    }

    fn indirect(&mut self, word: Word) -> Result<Statement> {
        use Word::*;
        match word {
            Run | List | Clear | Quit | Help => Err(error!(SyntaxError; "DIRECT ONLY")),
            _ => self.statement(word),
        }
    }

    fn statement(&mut self, word: Word) -> Result<Statement> {
        use Word::*;
        match word {
            Rem => Ok(Statement::Rem),
            Let => self.r#let(),
            Print => self.r#print(),
            Input => self.r#input(),
            End => {
                self.expect_end()?;
                Ok(Statement::End)
            }
            Goto => self.r#goto(),
            If => self.r#if(),
            Run | List | Clear | Quit | Help | Then => {
                Err(error!(SyntaxError; "EXPECTED STATEMENT"))
            }
        }
    }

    fn next(&mut self) -> Option<&'a Token> {
        self.last = self.pos;
        loop {
            let t = self.tokens.get(self.pos)?;
            self.pos += 1;
            if !t.is_whitespace() {
                return Some(t);
            }
        }
    }

    /// Push the most recently read token back onto the stream.
    fn save(&mut self) {
        self.pos = self.last;
    }

    fn has_more(&self) -> bool {
        self.tokens[self.pos..].iter().any(|t| !t.is_whitespace())
    }

    fn rest(&self) -> &'a [Token] {
        &self.tokens[self.pos..]
    }

    fn expect_end(&mut self) -> Result<()> {
        match self.next() {
            None => Ok(()),
            Some(_) => Err(error!(SyntaxError; "UNEXPECTED TOKEN")),
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        use Token::*;
        Err(error!(SyntaxError;
            match token {
                Unknown(_) | Whitespace(_) => {"UNEXPECTED TOKEN"}
                Literal(_) => {"EXPECTED LITERAL"}
                Word(_) => {"EXPECTED RESERVED WORD"}
                Operator(_) => {"EXPECTED OPERATOR"}
                Ident(_) => {"EXPECTED IDENTIFIER"}
                LParen => {"EXPECTED LEFT PARENTHESIS"}
                RParen => {"UNBALANCED PARENTHESES"}
            }
        ))
    }

    fn ident(&mut self) -> Result<Ident> {
        match self.next() {
            Some(Token::Ident(name)) => Ok(Ident::new(name.as_str())),
            Some(Token::Word(_)) => Err(error!(SyntaxError; "RESERVED WORD")),
            _ => Err(error!(SyntaxError; "EXPECTED IDENTIFIER")),
        }
    }

    fn line_number(&mut self) -> Result<LineNumber> {
        match self.next() {
            Some(t) => LineNumber::try_from(t),
            None => Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
        }
    }

    fn expression(&mut self, precedence: usize) -> Result<Expression> {
        let mut lhs = self.term()?;
        loop {
            let token = self.next();
            let op_precedence = match token {
                Some(Token::Operator(op)) => Self::op_precedence(op),
                _ => 0,
            };
            if op_precedence <= precedence {
                if token.is_some() {
                    self.save();
                }
                return Ok(lhs);
            }
            let op = match token {
                Some(Token::Operator(op)) => Self::binary_op(op)?,
                _ => return Err(error!(InternalError; "EXPECTED OPERATOR")),
            };
            let rhs = self.expression(op_precedence)?;
            lhs = Expression::compound(op, lhs, rhs);
        }
    }

    fn term(&mut self) -> Result<Expression> {
        match self.next() {
            Some(Token::Ident(name)) => Ok(Expression::Identifier(Ident::new(name.as_str()))),
            Some(Token::Literal(s)) => match s.parse::<i32>() {
                Ok(n) => Ok(Expression::Constant(n)),
                Err(_) => Err(error!(Overflow; "CONSTANT TOO LARGE")),
            },
            Some(Token::Operator(Operator::Minus)) => Ok(Expression::compound(
                ast::Operator::Subtract,
                Expression::Constant(0),
                self.expression(UNARY_PRECEDENCE)?,
            )),
            Some(Token::LParen) => {
                let expr = self.expression(0)?;
                self.expect(Token::RParen)?;
                Ok(expr)
            }
            _ => Err(error!(SyntaxError; "ILLEGAL TERM IN EXPRESSION")),
        }
    }

    fn op_precedence(op: &Operator) -> usize {
        use Operator::*;
        match op {
            Equal => 1,
            Plus | Minus => 2,
            Multiply | Divide => 3,
            Less | Greater => 0,
        }
    }

    fn binary_op(op: &Operator) -> Result<ast::Operator> {
        use Operator::*;
        match op {
            Plus => Ok(ast::Operator::Add),
            Minus => Ok(ast::Operator::Subtract),
            Multiply => Ok(ast::Operator::Multiply),
            Divide => Ok(ast::Operator::Divide),
            Equal => Ok(ast::Operator::Assign),
            Less | Greater => Err(error!(SyntaxError; "UNEXPECTED COMPARISON")),
        }
    }

    fn r#let(&mut self) -> Result<Statement> {
        let ident = self.ident()?;
        self.expect(Token::Operator(Operator::Equal))?;
        let expr = self.expression(0)?;
        self.expect_end()?;
        Ok(Statement::Let(ident, expr))
    }

    fn r#print(&mut self) -> Result<Statement> {
        if !self.has_more() {
            return Err(error!(SyntaxError; "EXPECTED EXPRESSION"));
        }
        let expr = self.expression(0)?;
        self.expect_end()?;
        Ok(Statement::Print(expr))
    }

    fn r#input(&mut self) -> Result<Statement> {
        let ident = self.ident()?;
        self.expect_end()?;
        Ok(Statement::Input(ident))
    }

    fn r#goto(&mut self) -> Result<Statement> {
        let line = self.line_number()?;
        self.expect_end()?;
        Ok(Statement::Goto(line))
    }

    /// `IF <expr> <cmp> <expr> THEN <line>`. The comparator is the first
    /// `=`, `<` or `>` outside parentheses.
    fn r#if(&mut self) -> Result<Statement> {
        let rest = self.rest();
        self.pos = self.tokens.len();
        let mut depth = 0usize;
        let mut found = None;
        for (index, token) in rest.iter().enumerate() {
            match token {
                Token::LParen => depth += 1,
                Token::RParen => depth = depth.saturating_sub(1),
                Token::Word(Word::Then) => break,
                Token::Operator(op) if depth == 0 && token.is_comparator() => {
                    found = Some((index, *op));
                    break;
                }
                _ => {}
            }
        }
        let (cmp_index, op) = match found {
            Some(found) => found,
            None => return Err(error!(SyntaxError; "EXPECTED COMPARISON")),
        };
        let comparator = match op {
            Operator::Less => Comparator::Less,
            Operator::Equal => Comparator::Equal,
            Operator::Greater => Comparator::Greater,
            _ => return Err(error!(InternalError; "EXPECTED COMPARISON")),
        };
        let after = &rest[cmp_index + 1..];
        let then_index = match after.iter().position(|t| *t == Token::Word(Word::Then)) {
            Some(index) => index,
            None => return Err(error!(SyntaxError; "EXPECTED THEN")),
        };
        let lhs = parse_expression(&rest[..cmp_index])?;
        let rhs = parse_expression(&after[..then_index])?;
        let mut target = Parser::new(&after[then_index + 1..]);
        let line = target.line_number()?;
        target.expect_end()?;
        Ok(Statement::If(lhs, comparator, rhs, line))
    }
}
