use super::{eval, Listing, Operation, Var};
use crate::error;
use crate::lang::ast::{Ident, Statement};
use crate::lang::{Error, Line, LineNumber};
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Included, Unbounded};
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// Where a run is. `Running` always names a stored line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Idle,
    Running(LineNumber),
    Halted,
}

impl Default for Cursor {
    fn default() -> Cursor {
        Cursor::Idle
    }
}

/// What executing one statement asks of its caller.
#[derive(Debug, PartialEq)]
pub enum Flow {
    Next,
    Print(i32),
    Input(Ident),
    Jump(LineNumber),
    End,
}

/// What one step of a run produced.
#[derive(Debug, PartialEq)]
pub enum Step {
    Stopped,
    Advanced,
    Print(i32),
    Input(Ident),
}

/// Execute a statement against the variable memory without touching any
/// cursor. Used directly for immediate lines.
pub fn execute(statement: &Statement, var: &mut Var) -> Result<Flow> {
    match statement {
        Statement::Rem => Ok(Flow::Next),
        Statement::Let(ident, expr) => {
            let value = eval(expr, var)?;
            var.store(ident, value);
            Ok(Flow::Next)
        }
        Statement::Print(expr) => Ok(Flow::Print(eval(expr, var)?)),
        Statement::Input(ident) => Ok(Flow::Input(ident.clone())),
        Statement::End => Ok(Flow::End),
        Statement::Goto(line) => Ok(Flow::Jump(*line)),
        Statement::If(lhs, cmp, rhs, line) => {
            let lhs = eval(lhs, var)?;
            let rhs = eval(rhs, var)?;
            if Operation::compare(*cmp, lhs, rhs) {
                Ok(Flow::Jump(*line))
            } else {
                Ok(Flow::Next)
            }
        }
    }
}

#[derive(Debug, Clone)]
struct Stored {
    line: Line,
    statement: Statement,
}

/// ## Program store
///
/// Stored lines keyed by line number, each holding the source text as typed
/// and its parsed statement. Execution order is ascending line number.

#[derive(Debug, Default)]
pub struct Program {
    lines: BTreeMap<LineNumber, Stored>,
    cursor: Cursor,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.cursor = Cursor::Idle;
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, number: LineNumber) -> bool {
        self.lines.contains_key(&number)
    }

    /// Store a numbered line, replacing both the source and the statement of
    /// any line with the same number.
    pub fn insert(&mut self, line: Line, statement: Statement) -> Result<Option<Line>> {
        let number = match line.number() {
            Some(number) => number,
            None => return Err(error!(InternalError; "DIRECT LINE IN PROGRAM")),
        };
        let prior = self.lines.insert(number, Stored { line, statement });
        Ok(prior.map(|stored| stored.line))
    }

    /// Removing a line that is not stored does nothing.
    pub fn remove(&mut self, number: LineNumber) -> Option<Line> {
        self.lines.remove(&number).map(|stored| stored.line)
    }

    pub fn source_line(&self, number: LineNumber) -> Result<&Line> {
        match self.lines.get(&number) {
            Some(stored) => Ok(&stored.line),
            None => Err(error!(MissingLine, Some(number))),
        }
    }

    pub fn statement(&self, number: LineNumber) -> Result<&Statement> {
        match self.lines.get(&number) {
            Some(stored) => Ok(&stored.statement),
            None => Err(error!(MissingLine, Some(number))),
        }
    }

    pub fn first_line_number(&self) -> Option<LineNumber> {
        self.lines.keys().next().copied()
    }

    /// The next stored line strictly after `number`.
    pub fn next_line_number(&self, number: LineNumber) -> Option<LineNumber> {
        self.lines
            .range((Excluded(number), Unbounded))
            .next()
            .map(|(n, _)| *n)
    }

    /// The first stored line at or after `number`.
    pub fn line_from(&self, number: LineNumber) -> Option<(LineNumber, &Line)> {
        self.lines
            .range((Included(number), Unbounded))
            .next()
            .map(|(n, stored)| (*n, &stored.line))
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.values().map(|stored| &stored.line)
    }

    pub fn listing(&self) -> Listing {
        self.lines
            .iter()
            .map(|(n, stored)| (*n, stored.line.source().to_string()))
            .collect()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn is_running(&self) -> bool {
        matches!(self.cursor, Cursor::Running(_))
    }

    /// Put the cursor on the first line. An empty program never starts.
    pub fn start(&mut self) -> bool {
        match self.first_line_number() {
            Some(first) => {
                debug!(line = first, "run started");
                self.cursor = Cursor::Running(first);
                true
            }
            None => {
                self.cursor = Cursor::Idle;
                false
            }
        }
    }

    /// Abandon any run in progress.
    pub fn stop(&mut self) {
        self.cursor = Cursor::Idle;
    }

    pub fn halt(&mut self) {
        if let Cursor::Running(line) = self.cursor {
            debug!(line, "halted");
        }
        self.cursor = Cursor::Halted;
    }

    /// Fall through to the next stored line, halting after the last one.
    pub fn advance(&mut self) {
        if let Cursor::Running(line) = self.cursor {
            match self.next_line_number(line) {
                Some(next) => self.cursor = Cursor::Running(next),
                None => self.halt(),
            }
        }
    }

    pub fn jump(&mut self, target: LineNumber) -> Result<()> {
        if !self.contains(target) {
            return Err(error!(UndefinedLine));
        }
        debug!(line = target, "jump");
        self.cursor = Cursor::Running(target);
        Ok(())
    }

    /// Execute the statement under the cursor and move the cursor.
    /// An `INPUT` leaves the cursor in place until `advance` is called.
    pub fn step(&mut self, var: &mut Var) -> Result<Step> {
        let line = match self.cursor {
            Cursor::Running(line) => line,
            Cursor::Idle | Cursor::Halted => return Ok(Step::Stopped),
        };
        self.step_line(line, var)
            .map_err(|e| e.in_line_number(Some(line)))
    }

    fn step_line(&mut self, line: LineNumber, var: &mut Var) -> Result<Step> {
        let statement = self.statement(line)?;
        trace!(line, %statement, "execute");
        match execute(statement, var)? {
            Flow::Next => {
                self.advance();
                Ok(Step::Advanced)
            }
            Flow::Print(value) => {
                self.advance();
                Ok(Step::Print(value))
            }
            Flow::Input(ident) => Ok(Step::Input(ident)),
            Flow::Jump(target) => {
                self.jump(target)?;
                Ok(Step::Advanced)
            }
            Flow::End => {
                self.halt();
                Ok(Step::Advanced)
            }
        }
    }
}
