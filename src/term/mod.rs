extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use basic::error;
use basic::lang::Error;
use basic::mach::{Event, Listing, Runtime};
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Signal, Terminal};
use std::io::ErrorKind;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

pub fn main(file: Option<&Path>, run: bool) {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("Error setting Ctrl-C handler: {}", error);
        return;
    }
    let mut runtime = Runtime::new();
    if let Some(path) = file {
        match load(&mut runtime, path) {
            Ok(()) => {
                if run {
                    runtime.run();
                }
            }
            Err(error) => eprintln!("{}", Style::new().bold().paint(format!("?{}", error))),
        }
    }
    if let Err(error) = main_loop(runtime, interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(mut runtime: Runtime, interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let command = Interface::new("BASIC")?;
    let input = Interface::new("INPUT")?;
    input.set_report_signal(Signal::Interrupt, true);

    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(5000) {
            Event::Stopped => {
                let saved_completer = command.completer();
                command.set_completer(Arc::new(LineCompleter::new(runtime.listing())));
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                command.set_completer(saved_completer);
                if runtime.enter(&string) {
                    command.add_history_unique(string);
                }
            }
            Event::Input(prompt) => {
                input.set_prompt(&prompt)?;
                match input.read_line()? {
                    ReadResult::Input(string) => {
                        runtime.enter(&string);
                    }
                    ReadResult::Signal(Signal::Interrupt) => {
                        input.set_buffer("")?;
                        input.lock_reader().cancel_read_line()?;
                        runtime.interrupt();
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
            }
            Event::Error(error) => {
                command.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(format!("?{}", error))
                ))?;
            }
            Event::Running => {}
            Event::Print(s) => {
                command.write_fmt(format_args!("{}", s))?;
            }
            Event::List(s) => {
                command.write_fmt(format_args!("{}\n", s))?;
            }
            Event::Quit => break,
        }
    }
    Ok(())
}

struct LineCompleter {
    listing: Listing,
}

impl LineCompleter {
    fn new(listing: Listing) -> LineCompleter {
        LineCompleter { listing }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        if let Ok(num) = prompter.buffer().trim().parse::<usize>() {
            if let Some(s) = self.listing.line(num) {
                let mut comp = Completion::simple(s.to_string());
                comp.suffix = linefeed::complete::Suffix::None;
                return Some(vec![comp]);
            }
        }
        None
    }
}

fn load(runtime: &mut Runtime, path: &Path) -> Result<(), Error> {
    debug!(path = %path.display(), "loading");
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) => match error.kind() {
            ErrorKind::NotFound => return Err(error!(FileNotFound)),
            _ => return Err(error!(InternalError; "UNABLE TO READ FILE")),
        },
    };
    runtime.load_str(&text)
}
