use crate::lang::{lex, Token};
use crate::Address;
use std::collections::HashMap;
use std::rc::Rc;

/// ## Token memory and label table
///
/// The ordered token sequence of a program plus its label index.
/// Both are built once by `load` and read-only afterwards.

#[derive(Debug, Default)]
pub struct Program {
    tokens: Vec<Token>,
    labels: HashMap<Rc<str>, Address>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn load(&mut self, source: &str) {
        self.tokens = lex(source);
        self.labels.clear();
        for (index, token) in self.tokens.iter().enumerate() {
            if let Token::Label(name) = token {
                // A label resolves to the token after it. Duplicate
                // names overwrite; the last occurrence wins.
                self.labels.insert(name.as_str().into(), index + 1);
            }
        }
    }

    pub fn token(&self, address: Address) -> Option<&Token> {
        self.tokens.get(address)
    }

    /// Look up a jump target. Referenced labels are never validated
    /// ahead of execution; a miss here is the runtime's problem.
    pub fn label(&self, name: &str) -> Option<Address> {
        self.labels.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_targets_follow_the_label() {
        let mut program = Program::new();
        program.load("nop loop: print \"x\" jmp \"loop\"");
        assert_eq!(program.label("loop"), Some(2));
        assert_eq!(program.label("missing"), None);
    }

    #[test]
    fn test_duplicate_label_last_wins() {
        let mut program = Program::new();
        program.load("L: nop L: nop");
        assert_eq!(program.label("L"), Some(3));
    }
}
