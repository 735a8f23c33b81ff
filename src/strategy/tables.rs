//! Basic strategy charts for a single fixed rule set.
//!
//! Columns are dealer upcards `2 3 4 5 6 7 8 9 10 A`.

use super::Action;

const H: Action = Action::Hit;
const S: Action = Action::Stand;
const D: Action = Action::Double;
const P: Action = Action::Split;

pub(super) const HARD_MIN: u32 = 5;
pub(super) const HARD_MAX: u32 = 21;
pub(super) const SOFT_MIN: u32 = 13;
pub(super) const SOFT_MAX: u32 = 21;

/// Hard totals 5..=21.
pub(super) const HARD: [[Action; 10]; 17] = [
    /* 5  */ [H, H, H, H, H, H, H, H, H, H],
    /* 6  */ [H, H, H, H, H, H, H, H, H, H],
    /* 7  */ [H, H, H, H, H, H, H, H, H, H],
    /* 8  */ [H, H, H, H, H, H, H, H, H, H],
    /* 9  */ [H, D, D, D, D, H, H, H, H, H],
    /* 10 */ [D, D, D, D, D, D, D, D, H, H],
    /* 11 */ [D, D, D, D, D, D, D, D, D, D],
    /* 12 */ [H, H, S, S, S, H, H, H, H, H],
    /* 13 */ [S, S, S, S, S, H, H, H, H, H],
    /* 14 */ [S, S, S, S, S, H, H, H, H, H],
    /* 15 */ [S, S, S, S, S, H, H, H, H, H],
    /* 16 */ [S, S, S, S, S, H, H, H, H, H],
    /* 17 */ [S, S, S, S, S, S, S, S, S, S],
    /* 18 */ [S, S, S, S, S, S, S, S, S, S],
    /* 19 */ [S, S, S, S, S, S, S, S, S, S],
    /* 20 */ [S, S, S, S, S, S, S, S, S, S],
    /* 21 */ [S, S, S, S, S, S, S, S, S, S],
];

/// Soft totals 13..=21.
pub(super) const SOFT: [[Action; 10]; 9] = [
    /* 13 */ [H, H, H, D, D, H, H, H, H, H],
    /* 14 */ [H, H, H, D, D, H, H, H, H, H],
    /* 15 */ [H, H, D, D, D, H, H, H, H, H],
    /* 16 */ [H, H, D, D, D, H, H, H, H, H],
    /* 17 */ [H, H, D, D, D, H, H, H, H, H],
    /* 18 */ [S, D, D, D, D, S, S, H, H, H],
    /* 19 */ [S, S, S, S, S, S, S, S, S, S],
    /* 20 */ [S, S, S, S, S, S, S, S, S, S],
    /* 21 */ [S, S, S, S, S, S, S, S, S, S],
];

/// Pairs by rank bucket `2..9, 10, A`. Non-split cells hold the hard-total
/// play for the same two cards, so 5/5 doubles like a hard 10 and 10/10
/// stands like a hard 20.
pub(super) const PAIRS: [[Action; 10]; 10] = [
    /* 2,2   */ [P, P, P, P, P, P, H, H, H, H],
    /* 3,3   */ [P, P, P, P, P, P, H, H, H, H],
    /* 4,4   */ [H, H, H, P, P, H, H, H, H, H],
    /* 5,5   */ [D, D, D, D, D, D, D, D, H, H],
    /* 6,6   */ [P, P, P, P, P, H, H, H, H, H],
    /* 7,7   */ [P, P, P, P, P, P, H, H, H, H],
    /* 8,8   */ [P, P, P, P, P, P, P, P, P, P],
    /* 9,9   */ [P, P, P, P, P, S, P, P, S, S],
    /* 10,10 */ [S, S, S, S, S, S, S, S, S, S],
    /* A,A   */ [P, P, P, P, P, P, P, P, P, P],
];
