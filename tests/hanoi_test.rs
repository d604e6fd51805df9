// Copyright (C) 2025 The exact-count authors. See LICENSE for details.

//! Integration tests for Tower of Hanoi move counting.

use exact_count::statistics::Counters;
use exact_count::{count_moves, CountContext, CountError, HanoiMoveCounter};
use num_bigint::BigUint;
use num_traits::{One, Zero};

#[test]
fn test_no_disks() {
    assert_eq!(count_moves(0).unwrap(), BigUint::zero());
}

#[test]
fn test_closed_form() {
    let mut ctx = CountContext::new();
    for n in 0..=30i64 {
        let expected = (BigUint::one() << n as usize) - BigUint::one();
        assert_eq!(ctx.count_moves(n).unwrap(), expected, "n = {}", n);
        assert_eq!(HanoiMoveCounter::closed_form(n as usize), expected);
    }
}

#[test]
fn test_recurrence_consistency() {
    let mut ctx = CountContext::new();
    for n in 1..=64i64 {
        let previous = ctx.count_moves(n - 1).unwrap();
        let current = ctx.count_moves(n).unwrap();
        assert_eq!(current, previous * 2u32 + 1u32, "n = {}", n);
    }
}

#[test]
fn test_exact_beyond_fixed_width() {
    let value = count_moves(1000).unwrap();
    assert_eq!(value.bits(), 1000);
    assert_eq!(value, HanoiMoveCounter::closed_form(1000));
}

#[test]
fn test_linear_work() {
    let mut ctx = CountContext::new();
    ctx.count_moves(500).unwrap();
    assert_eq!(ctx.statistics.get(Counters::Evaluations), 500);
    assert_eq!(ctx.statistics.get(Counters::BaseCases), 1);
}

#[test]
fn test_negative_input_rejected() {
    assert_eq!(
        count_moves(-1),
        Err(CountError::InvalidInput {
            argument: "n",
            value: -1
        })
    );
}

#[test]
fn test_determinism() {
    let mut ctx = CountContext::new();
    let first = ctx.count_moves(40).unwrap();
    assert_eq!(ctx.count_moves(40).unwrap(), first);
    assert_eq!(count_moves(40).unwrap(), first);
}
