// Copyright (C) 2025 The exact-count authors. See LICENSE for details.

//! Property-based tests for both counters.

use exact_count::{CountContext, HanoiMoveCounter, Limits, Strategy};
use num_bigint::BigUint;
use proptest::prelude::*;

proptest! {
    #[test]
    fn paths_are_symmetric(x in 0i64..60, y in 0i64..60) {
        let mut ctx = CountContext::new();
        prop_assert_eq!(ctx.count_paths(x, y).unwrap(), ctx.count_paths(y, x).unwrap());
    }

    #[test]
    fn paths_follow_recurrence(x in 1i64..60, y in 1i64..60) {
        let mut ctx = CountContext::new();
        let sum = ctx.count_paths(x - 1, y).unwrap()
            + ctx.count_paths(x, y - 1).unwrap()
            + ctx.count_paths(x - 1, y - 1).unwrap();
        prop_assert_eq!(ctx.count_paths(x, y).unwrap(), sum);
    }

    #[test]
    fn paths_are_monotone(x in 0i64..60, y in 0i64..60) {
        let mut ctx = CountContext::new();
        let here = ctx.count_paths(x, y).unwrap();
        prop_assert!(here <= ctx.count_paths(x + 1, y).unwrap());
        prop_assert!(here <= ctx.count_paths(x, y + 1).unwrap());
    }

    #[test]
    fn strategies_agree(x in 0i64..80, y in 0i64..80) {
        let top_down = CountContext::with_config(Limits::default(), Strategy::TopDown)
            .count_paths(x, y)
            .unwrap();
        let bottom_up = CountContext::with_config(Limits::default(), Strategy::BottomUp)
            .count_paths(x, y)
            .unwrap();
        prop_assert_eq!(top_down, bottom_up);
    }

    #[test]
    fn negative_coordinates_rejected(x in i64::MIN..0, y in 0i64..100) {
        let mut ctx = CountContext::new();
        prop_assert!(ctx.count_paths(x, y).is_err());
        prop_assert!(ctx.count_paths(y, x).is_err());
    }

    #[test]
    fn moves_match_closed_form(n in 0usize..2000) {
        let mut ctx = CountContext::new();
        prop_assert_eq!(ctx.count_moves(n as i64).unwrap(), HanoiMoveCounter::closed_form(n));
    }

    #[test]
    fn moves_double_plus_one(n in 1i64..500) {
        let mut ctx = CountContext::new();
        let previous = ctx.count_moves(n - 1).unwrap();
        prop_assert_eq!(ctx.count_moves(n).unwrap(), previous * BigUint::from(2u32) + 1u32);
    }
}
