use super::helpers::*;
use rill_ast::Ast;

#[test]
fn variable() {
    insta::assert_snapshot!(snapshot("foo"), @r#"(module (line (var "foo") 0))"#);
}

#[test]
fn constructor() {
    insta::assert_snapshot!(snapshot("Maybe"), @r#"(module (line (cons "Maybe") 0))"#);
}

#[test]
fn wildcard() {
    insta::assert_snapshot!(snapshot("_"), @"(module (line _ 0))");
}

#[test]
fn primes_belong_to_the_identifier() {
    insta::assert_snapshot!(snapshot("x''"), @r#"(module (line (var "x''") 0))"#);
}

#[test]
fn application_preserves_spacing() {
    insta::assert_snapshot!(
        snapshot("foo bar"),
        @r#"(module (line (app (var "foo") 1 (var "bar")) 0))"#
    );
    insta::assert_snapshot!(
        snapshot("foo   bar"),
        @r#"(module (line (app (var "foo") 3 (var "bar")) 0))"#
    );
}

#[test]
fn application_is_left_associative() {
    insta::assert_snapshot!(
        snapshot("a b c"),
        @r#"(module (line (app (app (var "a") 1 (var "b")) 1 (var "c")) 0))"#
    );
}

#[test]
fn non_breaker_after_identifier_is_an_invalid_suffix() {
    insta::assert_snapshot!(
        snapshot("foo?"),
        @r#"(module (line (invalid-suffix (var "foo") "?") 0))"#
    );
    insta::assert_snapshot!(
        snapshot("_x"),
        @r#"(module (line (invalid-suffix _ "x") 0))"#
    );
}

#[test]
fn suffix_consumes_the_whole_run() {
    // One invalid identifier, not a chain of applications.
    insta::assert_snapshot!(
        snapshot("foo?~?"),
        @r#"(module (line (invalid-suffix (var "foo") "?~?") 0))"#
    );
}

#[test]
fn breaker_characters_end_the_identifier() {
    // `(` breaks, so no invalid suffix arises.
    insta::assert_snapshot!(
        snapshot("foo(x)"),
        @r#"(module (line (app (var "foo") 0 (group 0 (var "x") 0)) 0))"#
    );
}

#[test]
fn identifier_pending_at_eof_is_submitted() {
    assert_eq!(first_elem("foo"), Ast::var("foo"));
}

#[test]
fn non_ascii_input_is_unrecognized() {
    insta::assert_snapshot!(
        snapshot("é"),
        @r#"(module (line (unrecognized "é") 0))"#
    );
}
