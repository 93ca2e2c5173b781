use basic::lang::{lex, token::*};

#[test]
fn test_line_number_and_tokens() {
    let (ln, v) = lex(" 10 LET X=1+Y ");
    assert_eq!(ln, Some(10));
    assert_eq!(
        v,
        vec![
            Token::Word(Word::Let),
            Token::Whitespace(1),
            Token::Ident("X".to_string()),
            Token::Operator(Operator::Equal),
            Token::Literal("1".to_string()),
            Token::Operator(Operator::Plus),
            Token::Ident("Y".to_string()),
        ]
    );
}

#[test]
fn test_direct_line() {
    let (ln, v) = lex("PRINT 7");
    assert_eq!(ln, None);
    assert_eq!(v.len(), 3);
}

#[test]
fn test_identifiers_are_whole_words() {
    let (_, v) = lex("10 PRINT PRINTX");
    assert_eq!(v.last(), Some(&Token::Ident("PRINTX".to_string())));
    let (_, v) = lex("10 LET A_1 = 2");
    assert_eq!(v[2], Token::Ident("A_1".to_string()));
}

#[test]
fn test_keywords_are_case_sensitive() {
    let (_, v) = lex("print");
    assert_eq!(v, vec![Token::Ident("print".to_string())]);
}

#[test]
fn test_remark_swallows_rest_of_line() {
    let (ln, v) = lex("5 REM X = (1 ");
    assert_eq!(ln, Some(5));
    assert_eq!(v[0], Token::Word(Word::Rem));
    assert_eq!(v.last(), Some(&Token::Unknown(" X = (1".to_string())));
}

#[test]
fn test_unknown_character() {
    let (_, v) = lex("PRINT 1 % 2");
    assert!(v.contains(&Token::Unknown("%".to_string())));
}
