mod common;
use basic::mach::Runtime;
use common::*;

#[test]
fn test_precedence() {
    let mut r = Runtime::default();
    assert_eq!(session(&mut r, &["PRINT 1+2*3"]), "7\n");
    assert_eq!(session(&mut r, &["PRINT (1+2)*3"]), "9\n");
    assert_eq!(session(&mut r, &["PRINT 10-4-3"]), "3\n");
    assert_eq!(session(&mut r, &["PRINT 100/10/5"]), "2\n");
    assert_eq!(session(&mut r, &["PRINT 2*3+4*5"]), "26\n");
}

#[test]
fn test_unary_minus() {
    let mut r = Runtime::default();
    assert_eq!(session(&mut r, &["PRINT -3+5"]), "2\n");
    assert_eq!(session(&mut r, &["PRINT -(3+5)"]), "-8\n");
    assert_eq!(session(&mut r, &["PRINT 2*-3"]), "-6\n");
    assert_eq!(session(&mut r, &["PRINT --4"]), "4\n");
}

#[test]
fn test_division_truncates() {
    let mut r = Runtime::default();
    assert_eq!(session(&mut r, &["PRINT 7/2"]), "3\n");
    assert_eq!(session(&mut r, &["PRINT -7/2"]), "-3\n");
}

#[test]
fn test_wrapping() {
    let mut r = Runtime::default();
    assert_eq!(
        session(&mut r, &["LET M = 2147483647", "PRINT M+1"]),
        "-2147483648\n"
    );
}

#[test]
fn test_assignment_yields_value() {
    let mut r = Runtime::default();
    assert_eq!(session(&mut r, &["PRINT (A = 4) * 2", "PRINT A"]), "8\n4\n");
    assert_eq!(session(&mut r, &["LET X = Y = 3", "PRINT X + Y"]), "6\n");
}

#[test]
fn test_illegal_assignment() {
    let mut r = Runtime::default();
    assert_eq!(
        session(&mut r, &["PRINT 3 = 4"]),
        "?SYNTAX ERROR; ILLEGAL VARIABLE IN ASSIGNMENT\n"
    );
}

#[test]
fn test_divide_by_zero() {
    let mut r = Runtime::default();
    assert_eq!(session(&mut r, &["PRINT 1/0"]), "?DIVIDE BY ZERO\n");
    assert_eq!(session(&mut r, &["LET Z = 0", "PRINT 5/Z"]), "?DIVIDE BY ZERO\n");
}

#[test]
fn test_undefined_variable() {
    let mut r = Runtime::default();
    assert_eq!(session(&mut r, &["PRINT Q"]), "?VARIABLE NOT DEFINED\n");
    assert_eq!(
        session(&mut r, &["10 PRINT Q", "RUN"]),
        "?VARIABLE NOT DEFINED IN 10\n"
    );
}

#[test]
fn test_failed_let_keeps_old_value() {
    let mut r = Runtime::default();
    assert_eq!(
        session(&mut r, &["LET A = 1", "LET A = 1/0", "PRINT A"]),
        "?DIVIDE BY ZERO\n1\n"
    );
}

#[test]
fn test_syntax_errors() {
    let mut r = Runtime::default();
    assert_eq!(
        session(&mut r, &["PRINT (1+2"]),
        "?SYNTAX ERROR; UNBALANCED PARENTHESES\n"
    );
    assert_eq!(
        session(&mut r, &["PRINT 1+"]),
        "?SYNTAX ERROR; ILLEGAL TERM IN EXPRESSION\n"
    );
    assert_eq!(
        session(&mut r, &["PRINT 99999999999"]),
        "?OVERFLOW; CONSTANT TOO LARGE\n"
    );
}
