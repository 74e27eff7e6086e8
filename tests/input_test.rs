mod common;
use common::*;
use labl::mach::Runtime;

#[test]
fn test_input_text_mode() {
    let mut r = Runtime::default();
    r.load("inp name 0 print name EOF");
    assert_eq!(exec_with_input(&mut r, &["Jay Doe"]), "Jay Doe\n");
}

#[test]
fn test_input_numeric_mode() {
    let mut r = Runtime::default();
    r.load("inp n 1 add n 1 print n EOF");
    assert_eq!(exec_with_input(&mut r, &["41"]), "42\n");
}

#[test]
fn test_input_numeric_is_stored_as_a_number() {
    let mut r = Runtime::default();
    r.load("inp n 1 cmp n 10 ej \"t\" print \"ne\" EOF t: print \"eq\" EOF");
    assert_eq!(exec_with_input(&mut r, &["10"]), "eq\n");
}

#[test]
fn test_input_mode_defaults_to_numeric() {
    // Anything but a number below one as the mode flag means numeric.
    let mut r = Runtime::default();
    r.load("inp n m print n EOF");
    assert_eq!(exec_with_input(&mut r, &["7"]), "7\n");
}

#[test]
fn test_input_numeric_parse_failure_is_fatal() {
    let mut r = Runtime::default();
    r.load("inp n 1 print \"unreached\" EOF");
    assert_eq!(
        exec_with_input(&mut r, &["abc"]),
        "TYPE MISMATCH; EXPECTED NUMERIC INPUT\n"
    );
}

#[test]
fn test_input_requires_a_variable_name() {
    let mut r = Runtime::default();
    r.load("inp 5 1 EOF");
    assert_eq!(
        exec(&mut r),
        "SYNTAX ERROR IN 0; EXPECTED A VARIABLE NAME\n"
    );
}

#[test]
fn test_two_inputs_in_program_order() {
    let mut r = Runtime::default();
    r.load("inp a 0 inp b 0 print b print a EOF");
    assert_eq!(exec_with_input(&mut r, &["one", "two"]), "two\none\n");
}
