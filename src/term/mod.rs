/*!
### Labl Terminal Module

Drives a `Runtime` from a terminal: prints program output, feeds
`inp` from an interactive line reader (or plain stdin when piped),
and maps faults and ctrl-c to exit codes.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;

use crate::error;
use crate::lang::Error;
use crate::mach::{Event, Runtime};
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Run a program from source text. Returns the process exit code:
/// 0 on normal termination, 1 on interrupt, 2 on a fatal fault.
pub fn main(source: &str) -> i32 {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    let mut runtime = Runtime::default();
    runtime.load(source);
    match main_loop(&mut runtime, interrupted) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error);
            1
        }
    }
}

fn main_loop(runtime: &mut Runtime, interrupted: Arc<AtomicBool>) -> io::Result<i32> {
    // Line editing only when a human is typing; piped input reads
    // straight from stdin.
    let interface = if io::stdin().is_terminal() {
        Interface::new("labl").ok()
    } else {
        None
    };
    let stdout = io::stdout();
    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            eprintln!("{}", Style::new().bold().paint("BREAK"));
            return Ok(1);
        }
        match runtime.execute(5000) {
            Event::Stopped => return Ok(0),
            Event::Running => {}
            Event::Print(s) => {
                let mut handle = stdout.lock();
                handle.write_fmt(format_args!("{}\n", s))?;
            }
            Event::Error(error) => {
                report(&error);
                return Ok(2);
            }
            Event::Input => match read_input_line(&interface)? {
                Some(line) => runtime.enter(&line),
                None => {
                    report(&error!(InputPastEnd));
                    return Ok(2);
                }
            },
        }
    }
}

/// One line for a pending `inp`. None means the channel is closed.
fn read_input_line(interface: &Option<Interface<linefeed::DefaultTerminal>>) -> io::Result<Option<String>> {
    match interface {
        Some(interface) => match interface.read_line()? {
            ReadResult::Input(line) => Ok(Some(line)),
            ReadResult::Eof | ReadResult::Signal(_) => Ok(None),
        },
        None => {
            let mut line = String::new();
            if io::stdin().lock().read_line(&mut line)? == 0 {
                return Ok(None);
            }
            while line.ends_with('\n') || line.ends_with('\r') {
                line.pop();
            }
            Ok(Some(line))
        }
    }
}

fn report(error: &Error) {
    eprintln!("{}", Style::new().bold().paint(error.to_string()));
}
