use super::*;
use crate::Rank::*;

fn hand(ranks: &[Rank]) -> Vec<CardToken> {
    ranks.iter().copied().map(CardToken::new).collect()
}

fn play(ranks: &[Rank], dealer: Rank) -> Action {
    classify(&hand(ranks), Some(CardToken::new(dealer))).unwrap()
}

const UPCARDS: [Rank; 10] = [Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Ace];

#[test]
fn test_always_split_aces() {
    assert_eq!(play(&[Ace, Ace], Nine), Action::Split);
    for dealer in UPCARDS {
        assert_eq!(play(&[Ace, Ace], dealer), Action::Split);
    }
}

#[test]
fn test_always_split_eights() {
    assert_eq!(play(&[Eight, Eight], Ace), Action::Split);
    for dealer in UPCARDS {
        assert_eq!(play(&[Eight, Eight], dealer), Action::Split);
    }
}

#[test]
fn test_hard_17_stands() {
    assert_eq!(play(&[Ten, Seven], Ten), Action::Stand);
    for dealer in UPCARDS {
        assert_eq!(play(&[Ten, Seven], dealer), Action::Stand);
    }
}

#[test]
fn test_soft_17_doubles_vs_5() {
    assert_eq!(play(&[Ace, Six], Five), Action::Double);
}

#[test]
fn test_hard_11_always_doubles() {
    assert_eq!(play(&[Six, Five], Seven), Action::Double);
    for dealer in UPCARDS {
        assert_eq!(play(&[Six, Five], dealer), Action::Double);
    }
}

#[test]
fn test_hard_16_vs_10_hits() {
    assert_eq!(play(&[Ten, Six], Ten), Action::Hit);
    assert_eq!(play(&[Ten, Six], King), Action::Hit);
    assert_eq!(play(&[Ten, Six], Six), Action::Stand);
}

#[test]
fn test_hard_12() {
    assert_eq!(play(&[Seven, Five], Five), Action::Stand);
    assert_eq!(play(&[Seven, Five], Three), Action::Hit);
    assert_eq!(play(&[Seven, Five], Seven), Action::Hit);
}

#[test]
fn test_hard_10_and_9() {
    assert_eq!(play(&[Six, Four], Nine), Action::Double);
    assert_eq!(play(&[Six, Four], Ten), Action::Hit);
    assert_eq!(play(&[Six, Four], Ace), Action::Hit);
    assert_eq!(play(&[Five, Four], Two), Action::Hit);
    assert_eq!(play(&[Five, Four], Three), Action::Double);
    assert_eq!(play(&[Five, Four], Seven), Action::Hit);
}

#[test]
fn test_low_totals_hit() {
    for dealer in UPCARDS {
        assert_eq!(play(&[Five, Three], dealer), Action::Hit);
        assert_eq!(play(&[Two, Three], dealer), Action::Hit);
    }
    assert_eq!(play(&[Two], Six), Action::Hit);
}

#[test]
fn test_soft_18() {
    assert_eq!(play(&[Ace, Seven], Nine), Action::Hit);
    assert_eq!(play(&[Ace, Seven], Queen), Action::Hit);
    assert_eq!(play(&[Ace, Seven], Ace), Action::Hit);
    assert_eq!(play(&[Ace, Seven], Three), Action::Double);
    assert_eq!(play(&[Ace, Seven], Six), Action::Double);
    assert_eq!(play(&[Ace, Seven], Two), Action::Stand);
    assert_eq!(play(&[Ace, Seven], Seven), Action::Stand);
    assert_eq!(play(&[Ace, Seven], Eight), Action::Stand);
}

#[test]
fn test_soft_19_and_up_stand() {
    for dealer in UPCARDS {
        assert_eq!(play(&[Ace, Eight], dealer), Action::Stand);
        assert_eq!(play(&[Ace, Nine], dealer), Action::Stand);
        assert_eq!(play(&[Ace, Ten], dealer), Action::Stand);
    }
}

#[test]
fn test_soft_13_14_narrow_double_window() {
    assert_eq!(play(&[Ace, Two], Four), Action::Hit);
    assert_eq!(play(&[Ace, Two], Five), Action::Double);
    assert_eq!(play(&[Ace, Three], Six), Action::Double);
    assert_eq!(play(&[Ace, Three], Seven), Action::Hit);
}

#[test]
fn test_soft_15_to_17_double_window() {
    for soft in [Four, Five, Six] {
        assert_eq!(play(&[Ace, soft], Three), Action::Hit);
        assert_eq!(play(&[Ace, soft], Four), Action::Double);
        assert_eq!(play(&[Ace, soft], Six), Action::Double);
        assert_eq!(play(&[Ace, soft], Seven), Action::Hit);
    }
}

#[test]
fn test_multi_card_soft_hand() {
    // A,2,4 is soft 17
    assert_eq!(play(&[Ace, Two, Four], Five), Action::Double);
    // A,6,9 is hard 16
    assert_eq!(play(&[Ace, Six, Nine], Ten), Action::Hit);
}

#[test]
fn test_nines_split_except_7_10_ace() {
    for dealer in UPCARDS {
        let expected = match dealer {
            Seven | Ten | Ace => Action::Stand,
            _ => Action::Split,
        };
        assert_eq!(play(&[Nine, Nine], dealer), expected, "9,9 vs {dealer}");
    }
    assert_eq!(play(&[Nine, Nine], Jack), Action::Stand);
}

#[test]
fn test_conditional_pair_windows() {
    for dealer in UPCARDS {
        let v = dealer.value();
        let split_2_to_7 = (2..=7).contains(&v);
        let split_2_to_6 = (2..=6).contains(&v);
        let split_5_to_6 = (5..=6).contains(&v);
        assert_eq!(play(&[Seven, Seven], dealer) == Action::Split, split_2_to_7);
        assert_eq!(play(&[Six, Six], dealer) == Action::Split, split_2_to_6);
        assert_eq!(play(&[Two, Two], dealer) == Action::Split, split_2_to_7);
        assert_eq!(play(&[Three, Three], dealer) == Action::Split, split_2_to_7);
        assert_eq!(play(&[Four, Four], dealer) == Action::Split, split_5_to_6);
    }
}

#[test]
fn test_fives_and_tens_never_split() {
    assert_eq!(play(&[Five, Five], Six), Action::Double);
    assert_eq!(play(&[Five, Five], Ten), Action::Hit);
    for dealer in UPCARDS {
        assert_ne!(play(&[Five, Five], dealer), Action::Split);
        assert_eq!(play(&[Ten, Ten], dealer), Action::Stand);
        assert_eq!(play(&[King, King], dealer), Action::Stand);
    }
}

#[test]
fn test_unsplit_pairs_match_hard_chart() {
    for rank in [Two, Three, Four, Five, Six, Seven, Nine, Ten] {
        for dealer in UPCARDS {
            let upcard = DealerUpcard::from(dealer);
            let pair = BASIC_STRATEGY.pair(rank, upcard);
            if pair != Action::Split {
                assert_eq!(pair, BASIC_STRATEGY.hard(rank.value() * 2, upcard));
            }
        }
    }
}

#[test]
fn test_mixed_faces_play_as_hard_20() {
    assert_eq!(play(&[King, Queen], Six), Action::Stand);
}

#[test]
fn test_face_upcards_share_ten_column() {
    for face in [Ten, Jack, Queen, King] {
        assert_eq!(DealerUpcard::from(face).label(), "10");
        assert_eq!(play(&[Six, Four], face), Action::Hit);
    }
    assert_eq!(DealerUpcard::from(Ace).value(), 11);
    assert_eq!(DealerUpcard::from(Ace).label(), "A");
}

#[test]
fn test_busted_hand_reads_as_stand() {
    assert_eq!(play(&[King, Queen, Five], Six), Action::Stand);
}

#[test]
fn test_incomplete_hand() {
    assert!(matches!(
        classify(&[], Some(CardToken::new(Six))),
        Err(AdvisorError::IncompleteHand(_))
    ));
    assert!(matches!(
        classify(&hand(&[Ten, Six]), None),
        Err(AdvisorError::IncompleteHand(_))
    ));
}

#[test]
fn test_hand_kind() {
    assert_eq!(HandKind::of(&evaluate(&hand(&[Ace, Ace]))), HandKind::Pair);
    assert_eq!(HandKind::of(&evaluate(&hand(&[Ace, Five]))), HandKind::Soft);
    assert_eq!(HandKind::of(&evaluate(&hand(&[Ten, Five]))), HandKind::Hard);
}

#[test]
fn test_chart_rows_cover_keys() {
    let hard: Vec<u32> = BASIC_STRATEGY.hard_rows().map(|(t, _)| t).collect();
    assert_eq!(hard.first(), Some(&5));
    assert_eq!(hard.last(), Some(&21));
    assert_eq!(BASIC_STRATEGY.soft_rows().count(), 9);
    let pairs: Vec<&str> = BASIC_STRATEGY.pair_rows().map(|(l, _)| l).collect();
    assert_eq!(pairs, COLUMN_LABELS.to_vec());
}
