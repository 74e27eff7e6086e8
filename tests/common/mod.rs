use labl::mach::{Event, Runtime};

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000, &[])
}

pub fn exec_with_input(runtime: &mut Runtime, inputs: &[&str]) -> String {
    exec_n(runtime, 5000, inputs)
}

/// Drain a runtime into a transcript. Print lines and the final
/// fault (if any) are collected; queued inputs feed `inp`. A program
/// that spins without events gets a cycles-exceeded marker so a test
/// can observe an intentional infinite loop and move on.
pub fn exec_n(runtime: &mut Runtime, cycles: usize, inputs: &[&str]) -> String {
    let mut s = String::new();
    let mut inputs = inputs.iter();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
                break;
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(ps);
                s.push('\n');
            }
            Event::Input => match inputs.next() {
                Some(line) => runtime.enter(line),
                None => {
                    s.push_str("\nOut of test input.\n");
                    break;
                }
            },
        }
        prev_running = match event {
            Event::Running => true,
            _ => false,
        };
    }
    s
}
