// Integration tests for the character stack

use rpntty::stack::{CharStack, StackError, DEFAULT_CAPACITY};

#[test]
fn test_new_stack_is_empty() {
    let stack = CharStack::new();
    assert!(stack.is_empty());
    assert!(!stack.is_full());
    assert_eq!(stack.len(), 0);
    assert_eq!(stack.limit(), None);
    assert_eq!(stack.top(), Err(StackError::Top));
}

#[test]
fn test_push_top_pop() {
    let mut stack = CharStack::new();
    stack.push('(').unwrap();
    stack.push('+').unwrap();

    assert_eq!(stack.top(), Ok('+'));
    // top does not remove
    assert_eq!(stack.top(), Ok('+'));
    assert_eq!(stack.len(), 2);

    stack.pop();
    assert_eq!(stack.top(), Ok('('));
    stack.pop();
    assert!(stack.is_empty());
}

#[test]
fn test_pop_on_empty_is_noop() {
    let mut stack = CharStack::new();
    stack.pop();
    assert!(stack.is_empty());

    stack.push('*').unwrap();
    stack.pop();
    stack.pop();
    assert!(stack.is_empty());
}

#[test]
fn test_items_are_bottom_to_top() {
    let mut stack = CharStack::new();
    for c in ['*', '(', '-'] {
        stack.push(c).unwrap();
    }
    assert_eq!(stack.items(), &['*', '(', '-']);
}

#[test]
fn test_init_resets() {
    let mut stack = CharStack::with_capacity_limit(3);
    stack.push('a').unwrap();
    stack.push('b').unwrap();
    stack.init();
    assert!(stack.is_empty());
    assert_eq!(stack.limit(), Some(3));
}

#[test]
fn test_capacity_limit() {
    let mut stack = CharStack::with_capacity_limit(2);
    stack.push('+').unwrap();
    assert!(!stack.is_full());
    stack.push('-').unwrap();
    assert!(stack.is_full());

    assert_eq!(stack.push('*'), Err(StackError::Push));
    // Failed push leaves the stack untouched
    assert_eq!(stack.items(), &['+', '-']);

    stack.pop();
    assert!(!stack.is_full());
    assert!(stack.push('*').is_ok());
}

#[test]
fn test_default_capacity_fills_up() {
    let mut stack = CharStack::with_capacity_limit(DEFAULT_CAPACITY);
    for _ in 0..DEFAULT_CAPACITY {
        stack.push('(').unwrap();
    }
    assert!(stack.is_full());
    assert_eq!(stack.push('('), Err(StackError::Push));
    assert_eq!(stack.len(), DEFAULT_CAPACITY);
}

#[test]
fn test_unbounded_stack_never_full() {
    let mut stack = CharStack::default();
    for _ in 0..1000 {
        stack.push('+').unwrap();
    }
    assert!(!stack.is_full());
}

#[test]
fn test_error_display() {
    assert_eq!(StackError::Push.to_string(), "Stack error: PUSH (stack is full)");
    assert_eq!(StackError::Top.to_string(), "Stack error: TOP (stack is empty)");
}
