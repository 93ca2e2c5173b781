use super::program::{execute, Flow, Step};
use super::{Cursor, Listing, Program, Var};
use crate::error;
use crate::lang::ast::{Command, Ident, Statement};
use crate::lang::{Error, Line, LineNumber};
use std::collections::VecDeque;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

pub const INPUT_PROMPT: &str = " ? ";
pub const INVALID_NUMBER: &str = "INVALID NUMBER\n";
pub const HELP: &str = "\
Yet another BASIC interpreter. Statements:
  REM <text>                       LET <var> = <expr>
  PRINT <expr>                     INPUT <var>
  END                              GOTO <line>
  IF <expr> <|=|> <expr> THEN <line>
Prefix a statement with a line number to store it; a bare line number
deletes that line. Commands: RUN LIST CLEAR QUIT HELP
";

/// ## Events
///
/// `Runtime::execute` reports what happened through these.
#[derive(Debug, PartialEq)]
pub enum Event {
    Stopped,
    Running,
    Print(String),
    Input(String),
    List(String),
    Error(Error),
    Quit,
}

#[derive(Debug)]
struct Pending {
    ident: Ident,
    direct: bool,
}

/// ## BASIC session
///
/// Owns exactly one program and one variable memory. Lines go in through
/// `enter`, and `execute` is called until it reports `Stopped` or `Input`.

#[derive(Debug, Default)]
pub struct Runtime {
    program: Program,
    var: Var,
    queued: VecDeque<Event>,
    direct: Option<Statement>,
    input: Option<Pending>,
    list_from: Option<LineNumber>,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn var(&self) -> &Var {
        &self.var
    }

    pub fn listing(&self) -> Listing {
        self.program.listing()
    }

    pub fn is_running(&self) -> bool {
        self.program.is_running()
    }

    pub fn is_waiting_for_input(&self) -> bool {
        self.input.is_some()
    }

    /// Accept one line of text. While an `INPUT` is waiting the text is its
    /// answer. Returns true if the line belongs in the history.
    pub fn enter(&mut self, s: &str) -> bool {
        if let Some(pending) = self.input.take() {
            self.answer(pending, s);
            return false;
        }
        let line = Line::new(s);
        if line.is_empty() {
            return match line.number() {
                Some(number) => {
                    self.program.remove(number);
                    true
                }
                None => false,
            };
        }
        match line.ast() {
            Err(error) => self.queued.push_back(Event::Error(error)),
            Ok(Command::Statement(statement)) => {
                if line.is_direct() {
                    self.direct = Some(statement);
                } else if let Err(error) = self.program.insert(line, statement) {
                    self.queued.push_back(Event::Error(error));
                }
            }
            Ok(Command::Run) => self.run(),
            Ok(Command::List) => self.list_from = Some(0),
            Ok(Command::Clear) => self.clear(),
            Ok(Command::Quit) => self.queued.push_back(Event::Quit),
            Ok(Command::Help) => self.queued.push_back(Event::Print(HELP.to_string())),
        }
        true
    }

    /// Replace the stored program with the lines of a BASIC source text.
    /// Blank lines are skipped. Nothing is kept if any line fails.
    pub fn load_str(&mut self, text: &str) -> Result<()> {
        let mut program = Program::new();
        for s in text.lines() {
            let line = Line::new(s);
            if line.is_empty() {
                if let Some(number) = line.number() {
                    program.remove(number);
                }
                continue;
            }
            if line.is_direct() {
                return Err(error!(DirectStatementInFile));
            }
            match line.ast()? {
                Command::Statement(statement) => {
                    program.insert(line, statement)?;
                }
                _ => return Err(error!(SyntaxError, line.number(); "DIRECT ONLY")),
            }
        }
        self.program = program;
        Ok(())
    }

    pub fn run(&mut self) {
        self.input = None;
        self.program.start();
    }

    /// Forget every stored line and every variable.
    pub fn clear(&mut self) {
        self.program.clear();
        self.var.clear();
        self.list_from = None;
    }

    /// Abort a run or a waiting `INPUT`.
    pub fn interrupt(&mut self) {
        let line = match self.program.cursor() {
            Cursor::Running(line) => Some(line),
            _ => None,
        };
        if line.is_some() || self.input.is_some() {
            debug!(?line, "interrupted");
            self.input = None;
            self.program.stop();
            self.queued.push_back(Event::Error(error!(Break).in_line_number(line)));
        }
        self.list_from = None;
    }

    /// Run for at most `cycles` statements and report the next event.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(event) = self.queued.pop_front() {
            return event;
        }
        if self.input.is_some() {
            return Event::Input(INPUT_PROMPT.to_string());
        }
        if let Some(from) = self.list_from.take() {
            if let Some((number, line)) = self.program.line_from(from) {
                self.list_from = number.checked_add(1);
                return Event::List(line.source().to_string());
            }
        }
        if let Some(statement) = self.direct.take() {
            match execute(&statement, &mut self.var) {
                Ok(Flow::Print(value)) => return Event::Print(format!("{}\n", value)),
                Ok(Flow::Input(ident)) => return self.suspend(ident, true),
                Ok(Flow::Next) | Ok(Flow::Jump(_)) | Ok(Flow::End) => {}
                Err(error) => return Event::Error(error),
            }
        }
        for _ in 0..cycles {
            match self.program.step(&mut self.var) {
                Ok(Step::Stopped) => {
                    self.program.stop();
                    return Event::Stopped;
                }
                Ok(Step::Advanced) => {}
                Ok(Step::Print(value)) => return Event::Print(format!("{}\n", value)),
                Ok(Step::Input(ident)) => return self.suspend(ident, false),
                Err(error) => {
                    self.program.stop();
                    return Event::Error(error);
                }
            }
        }
        Event::Running
    }

    fn suspend(&mut self, ident: Ident, direct: bool) -> Event {
        self.input = Some(Pending { ident, direct });
        Event::Input(INPUT_PROMPT.to_string())
    }

    fn answer(&mut self, pending: Pending, s: &str) {
        match parse_answer(s) {
            Some(value) => {
                self.var.store(&pending.ident, value);
                if !pending.direct {
                    self.program.advance();
                }
            }
            None => {
                self.queued.push_back(Event::Print(INVALID_NUMBER.to_string()));
                self.input = Some(pending);
            }
        }
    }
}

/// An optionally negative decimal integer and nothing else.
fn parse_answer(s: &str) -> Option<i32> {
    let s = s.trim();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest.trim_start()),
        None => ("", s),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    format!("{}{}", sign, digits).parse::<i32>().ok()
}
