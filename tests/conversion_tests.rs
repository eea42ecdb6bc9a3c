// Integration tests for infix to postfix conversion

use rpntty::converter::{infix_to_postfix, ConvertError, Converter};
use rpntty::stack::StackError;
use std::error::Error;

fn assert_converts(infix: &str, expected: &str) {
    let postfix = infix_to_postfix(infix).expect("Conversion failed");
    assert_eq!(postfix, expected, "converting {}", infix);
}

#[test]
fn test_single_operator() {
    assert_converts("a+B=", "aB+=");
    assert_converts("0-1=", "01-=");
    assert_converts("a*0=", "a0*=");
    assert_converts("B/1=", "B1/=");
}

#[test]
fn test_every_operator_between_two_operands() {
    for op in ['+', '-', '*', '/'] {
        let infix = format!("X{}Y=", op);
        let expected = format!("XY{}=", op);
        assert_converts(&infix, &expected);
    }
}

#[test]
fn test_single_operand() {
    assert_converts("a=", "a=");
    assert_converts("7=", "7=");
}

#[test]
fn test_left_to_right_associativity() {
    assert_converts("a+b+c=", "ab+c+=");
    assert_converts("a+b-c=", "ab+c-=");
    assert_converts("a-b+c=", "ab-c+=");
    assert_converts("A-B+C=", "AB-C+=");
    assert_converts("a/B*C=", "aB/C*=");
}

#[test]
fn test_multiplication_outranks_addition() {
    assert_converts("a*b+c=", "ab*c+=");
    assert_converts("a*B+c=", "aB*c+=");
    assert_converts("1*2/3=", "12*3/=");
    assert_converts("a+b*c=", "abc*+=");
    assert_converts("a+b*c-d=", "abc*+d-=");
    assert_converts("a-b/c*d+e=", "abc/d*-e+=");
}

#[test]
fn test_parentheses_override_priority() {
    assert_converts("(a+b)=", "ab+=");
    assert_converts("a*(b-c)=", "abc-*=");
    assert_converts("A+(B-c)=", "ABc-+=");
    assert_converts("A*(b/c)=", "Abc/*=");
    assert_converts("A*(b-C)=", "AbC-*=");
    assert_converts("((a))=", "a=");
    assert_converts("(a+b)*(c-d)=", "ab+cd-*=");
}

#[test]
fn test_complex_expression() {
    assert_converts(
        "(A*0+b)*((c*(1+D))-(e/(3*f+g)))=",
        "A0*b+c1D+*e3f*g+/-*=",
    );
}

#[test]
fn test_output_length_drops_parentheses() {
    let expressions = [
        "a=",
        "a+b=",
        "(a+b)*c=",
        "((a-b)/(c+d))*e=",
        "(A*0+b)*((c*(1+D))-(e/(3*f+g)))=",
    ];

    for infix in expressions {
        let postfix = infix_to_postfix(infix).expect("Conversion failed");
        let parens = infix.chars().filter(|c| *c == '(' || *c == ')').count();
        assert_eq!(postfix.len(), infix.len() - parens, "converting {}", infix);
        assert!(postfix.ends_with('='));
        assert_eq!(postfix.matches('=').count(), 1);
    }
}

#[test]
fn test_characters_outside_alphabet_are_skipped() {
    assert_converts("a + b * c =", "abc*+=");
    assert_converts(" ( a ) = ", "a=");
}

#[test]
fn test_scan_stops_at_end_marker() {
    assert_converts("a+b=c*d", "ab+=");
}

#[test]
fn test_converter_is_reusable() {
    let mut converter = Converter::new();
    assert_eq!(converter.convert("a+b*c=").unwrap(), "abc*+=");
    assert_eq!(converter.convert("(a+b)*c=").unwrap(), "ab+c*=");
    // Leftover stack state from a failed call must not leak into the next one
    assert!(converter.convert("(a+b").is_err());
    assert_eq!(converter.convert("a-b=").unwrap(), "ab-=");
}

#[test]
fn test_missing_end_marker() {
    assert_eq!(infix_to_postfix("a+b"), Err(ConvertError::MissingEndMarker));
    assert_eq!(infix_to_postfix(""), Err(ConvertError::MissingEndMarker));
}

#[test]
fn test_unmatched_right_paren_reports_stack_error() {
    assert_eq!(
        infix_to_postfix("a)="),
        Err(ConvertError::Stack(StackError::Top))
    );
    assert_eq!(
        infix_to_postfix("a+b)="),
        Err(ConvertError::Stack(StackError::Top))
    );
}

#[test]
fn test_unmatched_left_paren_is_drained() {
    // No balance check at the end marker: the '(' is emitted with the rest
    assert_converts("(a+b=", "ab+(=");
}

#[test]
fn test_bounded_stack() {
    let mut converter = Converter::with_stack_capacity(2);
    assert_eq!(converter.convert("(a+b)=").unwrap(), "ab+=");
    assert_eq!(converter.convert("a+b*c=").unwrap(), "abc*+=");
    assert_eq!(
        converter.convert("(((a)))="),
        Err(ConvertError::Stack(StackError::Push))
    );
    assert_eq!(
        converter.convert("a+(b*c)="),
        Err(ConvertError::Stack(StackError::Push))
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ConvertError::MissingEndMarker.to_string(),
        "Expression is not terminated with '='"
    );
    assert_eq!(
        ConvertError::Stack(StackError::Top).to_string(),
        "Operator stack misuse: Stack error: TOP (stack is empty)"
    );

    let source = String::new()
        .try_reserve_exact(usize::MAX)
        .expect_err("Reservation should fail");
    let err = ConvertError::Allocation {
        requested: 64,
        source,
    };
    assert_eq!(err.to_string(), "Failed to allocate output buffer of 64 bytes");
    assert!(err.source().is_some());
}
