/// A variable's value. Variables are dynamically retyped; every
/// store may change a name from number to text or back.
#[derive(Debug, PartialEq, Clone)]
pub enum Val {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Val::*;
        match self {
            Number(n) => write!(f, "{}", n),
            Text(s) => write!(f, "{}", s),
        }
    }
}
