use super::Val;
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn fetch(&self, var_name: &str) -> Option<&Val> {
        self.vars.get(var_name)
    }

    /// Numeric view of a variable. An unset name reads as zero;
    /// text that does not parse as a number is a type mismatch.
    pub fn fetch_number(&self, var_name: &str) -> Result<f64> {
        match self.vars.get(var_name) {
            None => Ok(0.0),
            Some(Val::Number(n)) => Ok(*n),
            Some(Val::Text(s)) => s.parse::<f64>().map_err(|_| error!(TypeMismatch)),
        }
    }

    pub fn store(&mut self, var_name: &str, value: Val) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.into(), value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_reads_as_zero() {
        let vars = Var::new();
        assert_eq!(vars.fetch("x"), None);
        assert_eq!(vars.fetch_number("x"), Ok(0.0));
    }

    #[test]
    fn test_retyping() {
        let mut vars = Var::new();
        vars.store("x", Val::Number(5.0));
        vars.store("x", Val::Text("five".to_string()));
        assert_eq!(vars.fetch("x"), Some(&Val::Text("five".to_string())));
        assert!(vars.fetch_number("x").is_err());
        vars.store("x", Val::Text("6".to_string()));
        assert_eq!(vars.fetch_number("x"), Ok(6.0));
    }
}
