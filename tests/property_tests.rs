//! Property-based tests for the keypad engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated keystroke sequences.

use keypad::core::{ExpressionState, Operator, Token};
use keypad::{Engine, Input, StepResult};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_operator()(variant in 0..4usize) -> Operator {
        Operator::ALL[variant]
    }
}

fn arbitrary_input() -> impl Strategy<Value = Input> {
    prop_oneof![
        6 => (0..10u32).prop_map(|d| Input::Digit(char::from_digit(d, 10).unwrap())),
        3 => arbitrary_operator().prop_map(Input::Operator),
        1 => Just(Input::Decimal),
        1 => Just(Input::Backspace),
        1 => Just(Input::Evaluate),
        1 => Just(Input::Clear),
    ]
}

fn editing_input() -> impl Strategy<Value = Input> {
    prop_oneof![
        6 => (0..10u32).prop_map(|d| Input::Digit(char::from_digit(d, 10).unwrap())),
        3 => arbitrary_operator().prop_map(Input::Operator),
        1 => Just(Input::Decimal),
        1 => Just(Input::Backspace),
    ]
}

fn run(inputs: &[Input]) -> Engine {
    let mut engine = Engine::new();
    for input in inputs {
        engine.apply(*input);
    }
    engine
}

/// Check the alternating-token invariant and return a description of the
/// first violation, if any.
fn violation(state: &ExpressionState) -> Option<String> {
    if state.is_error() && !state.is_empty() {
        return Some("error state carries tokens".to_string());
    }
    for (i, token) in state.tokens().iter().enumerate() {
        match token {
            Token::Number(text) => {
                if i % 2 != 0 {
                    return Some(format!("number at odd index {i}"));
                }
                let digits = text.strip_prefix('-').filter(|_| i == 0).unwrap_or(text);
                if digits.is_empty() {
                    return Some(format!("empty number at {i}"));
                }
                if digits.matches('.').count() > 1 {
                    return Some(format!("two decimal points in {text:?}"));
                }
                if !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
                    return Some(format!("stray character in {text:?}"));
                }
            }
            Token::Operator(_) => {
                if i % 2 == 0 {
                    return Some(format!("operator at even index {i}"));
                }
            }
        }
    }
    None
}

fn expected_current(state: &ExpressionState) -> String {
    if state.is_error() {
        return "Error".to_string();
    }
    match state.tokens().last() {
        None => "0".to_string(),
        Some(Token::Operator(_)) => String::new(),
        Some(Token::Number(text)) => text.clone(),
    }
}

proptest! {
    #[test]
    fn any_sequence_keeps_tokens_well_formed(
        inputs in prop::collection::vec(arbitrary_input(), 0..40)
    ) {
        let mut engine = Engine::new();
        for input in inputs {
            engine.apply(input);
            prop_assert_eq!(violation(engine.state()), None);
            prop_assert_eq!(engine.current(), expected_current(engine.state()));
        }
    }

    #[test]
    fn history_is_the_concatenation_of_tokens(
        inputs in prop::collection::vec(editing_input(), 0..30)
    ) {
        let engine = run(&inputs);
        let rebuilt: String = engine.state().tokens().iter().map(|t| t.to_string()).collect();
        prop_assert_eq!(engine.history(), rebuilt);
    }

    #[test]
    fn clear_is_idempotent(inputs in prop::collection::vec(arbitrary_input(), 0..30)) {
        let mut engine = run(&inputs);
        engine.clear();
        prop_assert_eq!(engine.history(), "");
        prop_assert_eq!(engine.current(), "0");

        let before = engine.snapshot();
        engine.clear();
        prop_assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn second_decimal_is_a_no_op(inputs in prop::collection::vec(editing_input(), 0..30)) {
        let mut engine = run(&inputs);
        if engine.current().contains('.') {
            let before = engine.snapshot();
            let step = engine.append_decimal();
            prop_assert!(step.is_ignored());
            prop_assert_eq!(engine.snapshot(), before);
        }
    }

    #[test]
    fn operator_never_stacks(
        inputs in prop::collection::vec(editing_input(), 0..20),
        first in arbitrary_operator(),
        second in arbitrary_operator(),
    ) {
        let mut engine = run(&inputs);
        engine.append_operator(first);
        engine.append_operator(second);
        let history = engine.history();
        prop_assert!(history.ends_with(second.symbol()));
        let tokens = engine.state().tokens();
        prop_assert!(!tokens[tokens.len() - 2].is_operator());
    }

    #[test]
    fn evaluate_never_escapes(inputs in prop::collection::vec(arbitrary_input(), 0..40)) {
        let mut engine = run(&inputs);
        match engine.apply(Input::Evaluate) {
            StepResult::Evaluated(Ok(text)) => {
                prop_assert_eq!(engine.current(), text.as_str());
                prop_assert_eq!(engine.history(), text);
            }
            StepResult::Evaluated(Err(_)) => {
                prop_assert_eq!(engine.current(), "Error");
                prop_assert_eq!(engine.history(), "");
            }
            other => prop_assert!(false, "unexpected step {:?}", other),
        }

        // The result, or the error, feeds straight into further typing.
        engine.apply(Input::Digit('1'));
        engine.apply(Input::Operator(Operator::Add));
        engine.apply(Input::Digit('2'));
        prop_assert_eq!(violation(engine.state()), None);
    }

    #[test]
    fn integer_sums_evaluate_exactly(a in 0u32..100_000, b in 0u32..100_000) {
        let mut engine = Engine::new();
        for key in format!("{a}+{b}=").chars() {
            engine.press_key(&key.to_string());
        }
        prop_assert_eq!(engine.current(), (a + b).to_string());
    }

    #[test]
    fn backspace_keeps_display_in_step(
        inputs in prop::collection::vec(editing_input(), 0..30),
        presses in 0..40usize,
    ) {
        let mut engine = run(&inputs);
        for _ in 0..presses {
            engine.backspace();
            prop_assert_eq!(engine.current(), expected_current(engine.state()));
        }
    }
}
