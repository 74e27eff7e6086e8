use super::{Program, Val, Var};
use crate::error;
use crate::lang::{Error, Token, Word};
use crate::Address;

type Result<T> = std::result::Result<T, Error>;

/// What the engine yielded control for. `Running` means the cycle
/// budget was spent; call `execute` again. The engine never halts
/// on its own by counting iterations.
#[derive(Debug, PartialEq)]
pub enum Event {
    Running,
    Stopped,
    Print(String),
    Input,
    Error(Error),
}

/// ## Execution engine
///
/// A fetch-dispatch loop over the token sequence. All interpreter
/// state lives here: instruction pointer, variable memory, the three
/// comparison flags, and the single pending-return slot. One Runtime
/// owns one execution exclusively; there are no globals.
#[derive(Default)]
pub struct Runtime {
    program: Program,
    pc: Address,
    vars: Var,
    greater: bool,
    less: bool,
    equal: bool,
    ret_addr: Address,
    pending: Option<Pending>,
    entered: Option<String>,
    stopped: bool,
}

struct Pending {
    var_name: String,
    text_mode: bool,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    /// Lex the source, build the label table, and reset all state.
    pub fn load(&mut self, source: &str) {
        self.program.load(source);
        self.pc = 0;
        self.vars.clear();
        self.greater = false;
        self.less = false;
        self.equal = false;
        self.ret_addr = 0;
        self.pending = None;
        self.entered = None;
        self.stopped = false;
    }

    /// Supply one line of input for a pending `inp`.
    pub fn enter(&mut self, line: &str) {
        self.entered = Some(line.to_string());
    }

    /// Halt the engine from outside. Used by the terminal for ctrl-c;
    /// the engine itself has no timeout or cancellation.
    pub fn interrupt(&mut self) {
        self.stopped = true;
    }

    /// Run up to `cycles` instructions. Returns on the first event of
    /// interest; a fatal fault halts the engine permanently.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if self.stopped {
            return Event::Stopped;
        }
        for _ in 0..cycles {
            match self.step() {
                Ok(None) => {}
                Ok(Some(Event::Stopped)) => {
                    self.stopped = true;
                    return Event::Stopped;
                }
                Ok(Some(event)) => return event,
                Err(error) => {
                    self.stopped = true;
                    return Event::Error(error);
                }
            }
        }
        Event::Running
    }

    fn step(&mut self) -> Result<Option<Event>> {
        if let Some(pending) = self.pending.take() {
            match self.entered.take() {
                Some(line) => self.finish_input(pending, line)?,
                None => {
                    self.pending = Some(pending);
                    return Ok(Some(Event::Input));
                }
            }
        }
        let word = match self.program.token(self.pc) {
            None => return Ok(Some(Event::Stopped)),
            Some(Token::Eof) => return Ok(Some(Event::Stopped)),
            Some(Token::Word(word)) => *word,
            // Anything else is a label marker, already consumed by
            // resolution, or a stray token left behind as an operand.
            Some(_) => {
                self.pc += 1;
                return Ok(None);
            }
        };
        // An instruction whose trailing operands would run past the
        // end of the program is skipped, not faulted.
        if self.pc + arity(word) >= self.program.len() {
            self.pc += 1;
            return Ok(None);
        }
        match word {
            Word::Nop => self.pc += 1,
            Word::Print => {
                let operand = self.operand(1);
                self.pc += 2;
                let line = match operand {
                    Token::String(text) => text,
                    Token::Ident(var_name) => match self.vars.fetch(&var_name) {
                        Some(val) => val.to_string(),
                        None => format!("UNDEFINED VARIABLE: {}", var_name),
                    },
                    _ => "SYNTAX ERROR: PRINT EXPECTS A STRING OR VARIABLE".to_string(),
                };
                return Ok(Some(Event::Print(line)));
            }
            Word::Cmp => {
                let left = self.number_of(&self.operand(1))?;
                let right = self.number_of(&self.operand(2))?;
                self.greater = left > right;
                self.less = left < right;
                self.equal = left == right;
                self.pc += 3;
            }
            Word::Var => {
                let var_name = self.ident_operand(1)?;
                let value = self.operand(2);
                self.pc += 3;
                match value {
                    Token::String(text) => self.vars.store(&var_name, Val::Text(text)),
                    Token::Number(text) => {
                        self.vars.store(&var_name, Val::Number(parse_literal(&text)?))
                    }
                    Token::Ident(other) => {
                        let val = match self.vars.fetch(&other) {
                            Some(val) => val.clone(),
                            None => Val::Number(0.0),
                        };
                        self.vars.store(&var_name, val);
                    }
                    token => {
                        let line = format!("SYNTAX ERROR: UNEXPECTED TOKEN '{}'", token);
                        return Ok(Some(Event::Print(line)));
                    }
                }
            }
            Word::Add | Word::Sub | Word::Mul | Word::Div => {
                let var_name = self.ident_operand(1)?;
                let a = self.vars.fetch_number(&var_name)?;
                let b = self.number_of(&self.operand(2))?;
                let result = match word {
                    Word::Add => a + b,
                    Word::Sub => a - b,
                    Word::Mul => a * b,
                    Word::Div => {
                        if b == 0.0 {
                            return Err(error!(DivisionByZero, self.pc));
                        }
                        a / b
                    }
                    _ => return Err(error!(InternalError, self.pc)),
                };
                self.vars.store(&var_name, Val::Number(result));
                self.pc += 3;
            }
            Word::Inp => {
                let var_name = self.ident_operand(1)?;
                let text_mode = match self.operand(2) {
                    Token::Number(text) => parse_literal(&text)? < 1.0,
                    _ => false,
                };
                self.pending = Some(Pending {
                    var_name,
                    text_mode,
                });
                self.pc += 3;
                return Ok(Some(Event::Input));
            }
            Word::Call => {
                // The slot is overwritten even when the jump falls
                // through; there is no stack, nested calls lose the
                // older return target.
                self.ret_addr = self.pc + 2;
                self.branch()?;
            }
            Word::Jmp => self.branch()?,
            Word::Ret => self.pc = self.ret_addr,
            Word::Gj => {
                if self.greater {
                    self.branch()?;
                } else {
                    self.pc += 1;
                }
            }
            Word::Lj => {
                if self.less {
                    self.branch()?;
                } else {
                    self.pc += 1;
                }
            }
            Word::Ej => {
                if self.equal {
                    self.branch()?;
                } else {
                    self.pc += 1;
                }
            }
        }
        Ok(None)
    }

    /// Transfer control for call/jmp and the conditional jumps. A
    /// string operand names the label directly and a miss is fatal.
    /// An identifier operand is indirect: the variable's text value
    /// names the label, and a miss falls through silently.
    fn branch(&mut self) -> Result<()> {
        match self.operand(1) {
            Token::String(name) => match self.program.label(&name) {
                Some(address) => self.pc = address,
                None => return Err(error!(UndefinedLabel, self.pc)),
            },
            Token::Ident(var_name) => {
                let target = match self.vars.fetch(&var_name) {
                    Some(Val::Text(name)) => self.program.label(name),
                    _ => None,
                };
                match target {
                    Some(address) => self.pc = address,
                    None => self.pc += 2,
                }
            }
            _ => return Err(error!(SyntaxError, self.pc; "EXPECTED A LABEL NAME")),
        }
        Ok(())
    }

    fn finish_input(&mut self, pending: Pending, line: String) -> Result<()> {
        if pending.text_mode {
            self.vars.store(&pending.var_name, Val::Text(line));
        } else {
            match line.trim().parse::<f64>() {
                Ok(n) => self.vars.store(&pending.var_name, Val::Number(n)),
                Err(_) => return Err(error!(TypeMismatch; "EXPECTED NUMERIC INPUT")),
            }
        }
        Ok(())
    }

    /// Clone of the token at pc + offset. Callers have already
    /// checked the operands exist.
    fn operand(&self, offset: usize) -> Token {
        match self.program.token(self.pc + offset) {
            Some(token) => token.clone(),
            None => Token::Eof,
        }
    }

    fn ident_operand(&self, offset: usize) -> Result<String> {
        match self.operand(offset) {
            Token::Ident(var_name) => Ok(var_name),
            _ => Err(error!(SyntaxError, self.pc; "EXPECTED A VARIABLE NAME")),
        }
    }

    /// Numeric view of an operand token.
    fn number_of(&self, token: &Token) -> Result<f64> {
        match token {
            Token::Ident(var_name) => self.vars.fetch_number(var_name),
            Token::Number(text) | Token::String(text) | Token::Label(text) => text
                .parse::<f64>()
                .map_err(|_| error!(TypeMismatch, self.pc)),
            Token::Word(_) | Token::Eof => Err(error!(TypeMismatch, self.pc)),
        }
    }
}

/// Trailing operand count per instruction. Never validated before
/// execution; operands are simply the next tokens in sequence.
fn arity(word: Word) -> usize {
    use Word::*;
    match word {
        Nop | Ret => 0,
        Print | Call | Jmp | Gj | Lj | Ej => 1,
        Var | Cmp | Add | Sub | Mul | Div | Inp => 2,
    }
}

/// A Number token always parsed once in the classifier; failure here
/// is a bug in the lexer, not the program.
fn parse_literal(text: &str) -> Result<f64> {
    text.parse::<f64>()
        .map_err(|_| error!(InternalError; "BAD NUMBER LITERAL"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(runtime: &mut Runtime) -> Vec<Event> {
        let mut events = vec![];
        loop {
            let event = runtime.execute(1000);
            match event {
                Event::Stopped | Event::Error(_) => {
                    events.push(event);
                    return events;
                }
                Event::Running | Event::Input => {
                    events.push(event);
                    return events;
                }
                _ => events.push(event),
            }
        }
    }

    #[test]
    fn test_empty_program_stops() {
        let mut runtime = Runtime::new();
        runtime.load("");
        assert_eq!(runtime.execute(10), Event::Stopped);
        assert_eq!(runtime.execute(10), Event::Stopped);
    }

    #[test]
    fn test_truncated_instruction_is_skipped() {
        let mut runtime = Runtime::new();
        runtime.load("print");
        assert_eq!(drain(&mut runtime), vec![Event::Stopped]);
    }

    #[test]
    fn test_return_slot_starts_at_zero() {
        let mut runtime = Runtime::new();
        // ret with no pending call jumps to address zero. The x latch
        // makes the second pass through the top reach EOF.
        runtime.load("cmp x 1 ej \"done\" var x 1 jmp \"sub\" done: print \"twice\" EOF sub: ret");
        let events = drain(&mut runtime);
        assert_eq!(
            events,
            vec![Event::Print("twice".to_string()), Event::Stopped]
        );
    }
}
