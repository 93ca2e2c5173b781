use super::{token::*, LineNumber};

pub fn lex(s: &str) -> (Option<LineNumber>, Vec<Token>) {
    BasicLexer::lex(s)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) -> Option<Token> {
        let mut len = 0;
        loop {
            self.chars().next();
            len += 1;
            if let Some(pk) = self.chars().peek() {
                if is_basic_whitespace(*pk) {
                    continue;
                }
            }
            return Some(Token::Whitespace(len));
        }
    }

    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if !is_basic_digit(*pk) {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
        debug_assert!(!s.is_empty(), "Failed to tokenize number.");
        Some(Token::Literal(s))
    }

    fn alphabetic(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if !is_basic_alphabetic(*pk) && !is_basic_digit(*pk) {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
        debug_assert!(!s.is_empty(), "Failed to tokenize alphabetic.");
        match Word::from_string(&s) {
            Some(word) => Some(Token::Word(word)),
            None => Some(Token::Ident(s)),
        }
    }

    fn minutia(&mut self) -> Option<Token> {
        let ch = self.chars().next()?;
        let s = ch.to_string();
        match Token::from_string(&s) {
            Some(t) => Some(t),
            None => Some(Token::Unknown(s)),
        }
    }
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    remark: bool,
}

impl<'a> Tokenizers<'a> for BasicLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let pk = self.chars.peek()?;
        if self.remark {
            return Some(Token::Unknown(self.chars.by_ref().collect::<String>()));
        }
        if is_basic_whitespace(*pk) {
            return self.whitespace();
        }
        if is_basic_digit(*pk) {
            return self.number();
        }
        if is_basic_alphabetic(*pk) {
            let r = self.alphabetic();
            if let Some(Token::Word(Word::Rem)) = r {
                self.remark = true;
            }
            return r;
        }
        self.minutia()
    }
}

impl<'a> BasicLexer<'a> {
    fn lex(s: &str) -> (Option<LineNumber>, Vec<Token>) {
        let mut line_number = None;
        let mut s = s;
        let trimmed = s.trim_start();
        let digits = trimmed
            .chars()
            .take_while(|c| is_basic_digit(*c))
            .count();
        if digits > 0 {
            if let Ok(n) = trimmed[..digits].parse::<LineNumber>() {
                line_number = Some(n);
                s = &trimmed[digits..];
            }
        }
        let mut tokens = BasicLexer {
            chars: s.chars().peekable(),
            remark: false,
        }
        .collect();
        BasicLexer::trim_start(&mut tokens);
        BasicLexer::trim_end(&mut tokens);
        (line_number, tokens)
    }

    fn trim_start(tokens: &mut Vec<Token>) {
        if let Some(Token::Whitespace(_)) = tokens.first() {
            tokens.remove(0);
        }
    }

    fn trim_end(tokens: &mut Vec<Token>) {
        if let Some(Token::Whitespace(_)) = tokens.last() {
            tokens.pop();
        }
        if let Some(Token::Unknown(_)) = tokens.last() {
            if let Some(Token::Unknown(s)) = tokens.pop() {
                tokens.push(Token::Unknown(s.trim_end().to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_number_split() {
        let (ln, tokens) = lex("  10 PRINT X");
        assert_eq!(ln, Some(10));
        assert_eq!(
            tokens,
            vec![
                Token::Word(Word::Print),
                Token::Whitespace(1),
                Token::Ident("X".to_string()),
            ]
        );
    }

    #[test]
    fn test_number_glued_to_keyword() {
        let (ln, tokens) = lex("20GOTO 5");
        assert_eq!(ln, Some(20));
        assert_eq!(tokens[0], Token::Word(Word::Goto));
        assert_eq!(tokens[2], Token::Literal("5".to_string()));
    }

    #[test]
    fn test_direct_line() {
        let (ln, tokens) = lex("LET A1 = (B_2+3)");
        assert_eq!(ln, None);
        let tokens: Vec<Token> = tokens.into_iter().filter(|t| !t.is_whitespace()).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Word(Word::Let),
                Token::Ident("A1".to_string()),
                Token::Operator(Operator::Equal),
                Token::LParen,
                Token::Ident("B_2".to_string()),
                Token::Operator(Operator::Plus),
                Token::Literal("3".to_string()),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_keyword_inside_identifier() {
        let (_, tokens) = lex("PRINT THENCE");
        assert_eq!(tokens[2], Token::Ident("THENCE".to_string()));
    }

    #[test]
    fn test_remark_swallows_rest() {
        let (_, tokens) = lex("10 REM  IF X THEN 20  ");
        assert_eq!(
            tokens,
            vec![
                Token::Word(Word::Rem),
                Token::Unknown("  IF X THEN 20".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_characters() {
        let (_, tokens) = lex("PRINT 3.5");
        assert_eq!(tokens[3], Token::Unknown(".".to_string()));
    }
}
