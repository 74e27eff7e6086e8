#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// A jump target declaration; the trailing `:` is stripped.
    Label(String),
    /// A quoted literal; the surrounding quotes are stripped.
    String(String),
    /// A numeric literal. The text is kept as written; conversion
    /// to a float happens in the machine.
    Number(String),
    Word(Word),
    Ident(String),
    /// End of program sentinel, written literally as `EOF`.
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Label(s) => write!(f, "{}:", s),
            String(s) => write!(f, "\"{}\"", s),
            Number(s) => write!(f, "{}", s),
            Word(w) => write!(f, "{}", w),
            Ident(s) => write!(f, "{}", s),
            Eof => write!(f, "EOF"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Var,
    Print,
    Call,
    Jmp,
    Ret,
    Nop,
    Add,
    Sub,
    Mul,
    Div,
    Inp,
    Cmp,
    Gj,
    Lj,
    Ej,
}

impl Word {
    pub fn from_string(s: &str) -> Option<Word> {
        use Word::*;
        match s {
            "var" => Some(Var),
            "print" => Some(Print),
            "call" => Some(Call),
            "jmp" => Some(Jmp),
            "ret" => Some(Ret),
            "nop" => Some(Nop),
            "add" => Some(Add),
            "sub" => Some(Sub),
            "mul" => Some(Mul),
            "div" => Some(Div),
            "inp" => Some(Inp),
            "cmp" => Some(Cmp),
            "gj" => Some(Gj),
            "lj" => Some(Lj),
            "ej" => Some(Ej),
            _ => None,
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Var => write!(f, "var"),
            Print => write!(f, "print"),
            Call => write!(f, "call"),
            Jmp => write!(f, "jmp"),
            Ret => write!(f, "ret"),
            Nop => write!(f, "nop"),
            Add => write!(f, "add"),
            Sub => write!(f, "sub"),
            Mul => write!(f, "mul"),
            Div => write!(f, "div"),
            Inp => write!(f, "inp"),
            Cmp => write!(f, "cmp"),
            Gj => write!(f, "gj"),
            Lj => write!(f, "lj"),
            Ej => write!(f, "ej"),
        }
    }
}
