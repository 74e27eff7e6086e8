use super::token::{Token, Word};

/// Lex an entire source text into classified tokens. Each line is
/// scanned independently; a quoted span never crosses a line break.
pub fn lex(s: &str) -> Vec<Token> {
    s.split('\n')
        .flat_map(|line| LablLexer::new(line.trim_end_matches('\r')))
        .map(|lexeme| classify(&lexeme))
        .collect()
}

/// Classify one lexeme. First match wins; nothing is rejected here,
/// anything unrecognized becomes an identifier and the machine sorts
/// it out at runtime.
pub fn classify(s: &str) -> Token {
    if let Some(name) = s.strip_suffix(':') {
        return Token::Label(name.to_string());
    }
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        return Token::String(s[1..s.len() - 1].to_string());
    }
    if s.parse::<f64>().is_ok() {
        return Token::Number(s.to_string());
    }
    if let Some(word) = Word::from_string(s) {
        return Token::Word(word);
    }
    if s == "EOF" {
        return Token::Eof;
    }
    Token::Ident(s.to_string())
}

struct LablLexer<'a> {
    chars: std::str::Chars<'a>,
    in_quotes: bool,
}

impl<'a> LablLexer<'a> {
    fn new(line: &'a str) -> LablLexer<'a> {
        LablLexer {
            chars: line.chars(),
            in_quotes: false,
        }
    }
}

impl<'a> Iterator for LablLexer<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut lexeme = String::new();
        while let Some(ch) = self.chars.next() {
            if ch == '"' {
                self.in_quotes = !self.in_quotes;
                lexeme.push(ch);
            } else if ch == ' ' && !self.in_quotes {
                if !lexeme.is_empty() {
                    return Some(lexeme);
                }
            } else {
                lexeme.push(ch);
            }
        }
        if lexeme.is_empty() {
            None
        } else {
            Some(lexeme)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_space() {
        let tokens = lex("print \"hi there\"");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1], Token::String("hi there".to_string()));
    }

    #[test]
    fn test_quotes_do_not_cross_lines() {
        let tokens = lex("print \"hi\nthere\"");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1], Token::Ident("\"hi".to_string()));
        assert_eq!(tokens[2], Token::Ident("there\"".to_string()));
    }

    #[test]
    fn test_runs_of_spaces() {
        let tokens = lex("  var   x    5  ");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], Token::Word(Word::Var));
        assert_eq!(tokens[1], Token::Ident("x".to_string()));
        assert_eq!(tokens[2], Token::Number("5".to_string()));
    }
}
