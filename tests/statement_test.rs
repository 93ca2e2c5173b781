mod common;
use basic::mach::Runtime;
use common::*;

#[test]
fn test_goto_skips_line() {
    let mut r = Runtime::default();
    let lines = [
        "40 END",
        "30 PRINT X",
        "10 LET X = 1",
        "20 GOTO 40",
        "RUN",
    ];
    assert_eq!(session(&mut r, &lines), "");
}

#[test]
fn test_goto_backwards() {
    let mut r = Runtime::default();
    let lines = [
        "10 LET I = 0",
        "20 LET I = I + 1",
        "30 IF I < 3 THEN 20",
        "40 PRINT I",
        "RUN",
    ];
    assert_eq!(session(&mut r, &lines), "3\n");
}

#[test]
fn test_if_taken_and_not_taken() {
    let mut r = Runtime::default();
    let lines = [
        "10 LET X = 5",
        "20 IF X > 3 THEN 40",
        "30 PRINT 0",
        "40 PRINT X",
        "RUN",
    ];
    assert_eq!(session(&mut r, &lines), "5\n");
    assert_eq!(session(&mut r, &["10 LET X = 3", "RUN"]), "0\n3\n");
    assert_eq!(
        session(&mut r, &["20 IF X = 3 THEN 40", "RUN"]),
        "3\n"
    );
    assert_eq!(
        session(&mut r, &["20 IF X < 3 THEN 40", "RUN"]),
        "0\n3\n"
    );
}

#[test]
fn test_if_assignment_in_condition() {
    let mut r = Runtime::default();
    let lines = [
        "10 IF (X = 7) > 6 THEN 30",
        "20 PRINT 0",
        "30 PRINT X",
        "RUN",
    ];
    assert_eq!(session(&mut r, &lines), "7\n");
}

#[test]
fn test_end_stops() {
    let mut r = Runtime::default();
    let lines = ["10 PRINT 1", "20 END", "30 PRINT 2", "RUN"];
    assert_eq!(session(&mut r, &lines), "1\n");
}

#[test]
fn test_rem_is_skipped() {
    let mut r = Runtime::default();
    let lines = ["10 REM PRINT 1", "20 PRINT 2", "RUN"];
    assert_eq!(session(&mut r, &lines), "2\n");
}

#[test]
fn test_goto_missing_line() {
    let mut r = Runtime::default();
    let lines = ["10 PRINT 1", "20 GOTO 100", "RUN"];
    assert_eq!(session(&mut r, &lines), "1\n?LINE NUMBER ERROR IN 20\n");
}

#[test]
fn test_goto_deleted_line() {
    let mut r = Runtime::default();
    let lines = ["10 GOTO 30", "30 PRINT 3", "30", "RUN"];
    assert_eq!(session(&mut r, &lines), "?LINE NUMBER ERROR IN 10\n");
}

#[test]
fn test_run_empty_program() {
    let mut r = Runtime::default();
    assert_eq!(session(&mut r, &["RUN"]), "");
}

#[test]
fn test_run_twice() {
    let mut r = Runtime::default();
    let lines = ["10 LET N = N + 1", "20 PRINT N", "LET N = 0", "RUN"];
    assert_eq!(session(&mut r, &lines), "1\n");
    assert_eq!(session(&mut r, &["RUN"]), "2\n");
}

#[test]
fn test_infinite_loop() {
    let mut r = Runtime::default();
    r.enter("10 GOTO 10");
    r.enter("RUN");
    assert_eq!(exec_n(&mut r, 100), "\n100 Execution cycles exceeded.\n");
    r.interrupt();
    assert_eq!(exec(&mut r), "?BREAK IN 10\n");
}

#[test]
fn test_illegal_direct() {
    let mut r = Runtime::default();
    assert_eq!(session(&mut r, &["GOTO 10"]), "?SYNTAX ERROR; ILLEGAL DIRECT\n");
    assert_eq!(session(&mut r, &["END"]), "?SYNTAX ERROR; ILLEGAL DIRECT\n");
    assert_eq!(session(&mut r, &["10 RUN"]), "?SYNTAX ERROR IN 10; DIRECT ONLY\n");
}
