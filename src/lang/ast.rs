//! ## Abstract syntax tree
//!
//! Expressions own their children outright. Statements are built once when
//! a line is entered and never change afterwards.

use super::LineNumber;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    /// `REM`, does nothing.
    Rem,
    Let(Ident, Expression),
    Print(Expression),
    Input(Ident),
    End,
    Goto(LineNumber),
    If(Expression, Comparator, Expression, LineNumber),
}

/// A classified line. Session commands are only valid in direct mode and
/// never reach the program store.
#[derive(Debug, PartialEq, Clone)]
pub enum Command {
    Statement(Statement),
    Run,
    List,
    Clear,
    Quit,
    Help,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Ident(String);

impl Ident {
    pub fn new<S: Into<String>>(name: S) -> Ident {
        Ident(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Constant(i32),
    Identifier(Ident),
    /// Binary arithmetic, or assignment when the operator is `=`.
    Compound(Operator, Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn compound(op: Operator, lhs: Expression, rhs: Expression) -> Expression {
        Expression::Compound(op, Box::new(lhs), Box::new(rhs))
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Assign,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Comparator {
    Less,
    Equal,
    Greater,
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Add => write!(f, "+"),
            Subtract => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Assign => write!(f, "="),
        }
    }
}

impl std::fmt::Display for Comparator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Comparator::*;
        match self {
            Less => write!(f, "<"),
            Equal => write!(f, "="),
            Greater => write!(f, ">"),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Expression::*;
        match self {
            Constant(n) => write!(f, "{}", n),
            Identifier(ident) => write!(f, "{}", ident),
            Compound(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        match self {
            Rem => write!(f, "REM"),
            Let(ident, expr) => write!(f, "LET {} = {}", ident, expr),
            Print(expr) => write!(f, "PRINT {}", expr),
            Input(ident) => write!(f, "INPUT {}", ident),
            End => write!(f, "END"),
            Goto(line) => write!(f, "GOTO {}", line),
            If(lhs, cmp, rhs, line) => write!(f, "IF {} {} {} THEN {}", lhs, cmp, rhs, line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_fully_parenthesized() {
        let expr = Expression::compound(
            Operator::Add,
            Expression::Constant(1),
            Expression::compound(
                Operator::Multiply,
                Expression::Identifier(Ident::new("X")),
                Expression::Constant(3),
            ),
        );
        assert_eq!(expr.to_string(), "(1 + (X * 3))");
    }

    #[test]
    fn test_display_statement() {
        let stmt = Statement::If(
            Expression::Identifier(Ident::new("X")),
            Comparator::Greater,
            Expression::Constant(3),
            40,
        );
        assert_eq!(stmt.to_string(), "IF X > 3 THEN 40");
    }
}
