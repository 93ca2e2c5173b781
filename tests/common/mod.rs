#![allow(dead_code)]
use basic::mach::{Event, Runtime};

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped | Event::Quit => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("?{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(ps);
            }
            Event::Input(ps) => {
                s.push_str(ps);
                break;
            }
            Event::List(ls) => {
                s.push_str(&format!("{}\n", ls));
            }
        }
        prev_running = event == Event::Running;
    }
    s
}

/// Enter lines one at a time the way the terminal does, draining the
/// events after each.
pub fn session(runtime: &mut Runtime, lines: &[&str]) -> String {
    let mut s = String::new();
    for line in lines {
        runtime.enter(line);
        s.push_str(&exec(runtime));
    }
    s
}
