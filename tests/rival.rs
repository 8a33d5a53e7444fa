use bet_advisor::cards::parse_cards;
use bet_advisor::error::AdvisorError;
use bet_advisor::game::Street;
use bet_advisor::rival::{MAX_FOLD_CHANCE, MIN_FOLD_CHANCE, RivalStyle, fold_chance};

#[test]
fn fold_chance_never_drops_as_bets_grow() {
    let board = parse_cards("Kd 8c 3h").unwrap();
    for street in Street::ALL {
        for style in RivalStyle::ALL {
            for in_position in [true, false] {
                let mut previous = f64::NEG_INFINITY;
                for step in 0..=400 {
                    let bet = step as f64 * 0.01 * 100.0;
                    let chance =
                        fold_chance(bet, 100.0, street, in_position, style, &board).unwrap();
                    assert!(
                        chance >= previous,
                        "{street} {style} bet={bet}: {chance} < {previous}"
                    );
                    previous = chance;
                }
            }
        }
    }
}

#[test]
fn fold_chance_stays_inside_hard_bounds() {
    let boards = ["", "2c 6d Th", "8h 9h Th", "Ac Ad 5c 9s", "2h 5h 9h Kh Qh"];
    for board in boards {
        let board = parse_cards(board).unwrap();
        for style in RivalStyle::ALL {
            for (bet, pot) in [(0.0, 1.0), (1000.0, 1.0), (1.0, 1000.0), (50.0, 100.0)] {
                let chance = fold_chance(bet, pot, Street::River, false, style, &board).unwrap();
                assert!((MIN_FOLD_CHANCE..=MAX_FOLD_CHANCE).contains(&chance));
            }
        }
    }
}

#[test]
fn huge_overbet_against_tight_player_saturates() {
    let chance = fold_chance(1000.0, 1.0, Street::River, false, RivalStyle::Tight, &[]).unwrap();
    assert_eq!(chance, MAX_FOLD_CHANCE);

    // the ratio itself saturates at 3x pot
    let at_cap = fold_chance(3.0, 1.0, Street::Flop, true, RivalStyle::Neutral, &[]).unwrap();
    let beyond = fold_chance(1000.0, 1.0, Street::Flop, true, RivalStyle::Neutral, &[]).unwrap();
    assert_eq!(at_cap, beyond);
}

#[test]
fn tiny_bet_against_station_hits_the_floor() {
    let board = parse_cards("8h 9h Th").unwrap();
    let chance = fold_chance(0.01, 100.0, Street::Preflop, true, RivalStyle::Station, &board)
        .unwrap();
    assert_eq!(chance, MIN_FOLD_CHANCE);
}

#[test]
fn position_and_style_shift_additively() {
    let oop = fold_chance(50.0, 100.0, Street::Turn, false, RivalStyle::Neutral, &[]).unwrap();
    let ip = fold_chance(50.0, 100.0, Street::Turn, true, RivalStyle::Neutral, &[]).unwrap();
    assert!((oop - ip - 0.10).abs() < 1e-12);

    let tag = fold_chance(50.0, 100.0, Street::Turn, true, RivalStyle::Tag, &[]).unwrap();
    let lag = fold_chance(50.0, 100.0, Street::Turn, true, RivalStyle::Lag, &[]).unwrap();
    assert!((tag - ip - 0.05).abs() < 1e-12);
    assert!((ip - lag - 0.05).abs() < 1e-12);
}

#[test]
fn unknown_tags_use_defaults() {
    let fallback = fold_chance(
        40.0,
        100.0,
        Street::from_tag("showdown"),
        true,
        RivalStyle::from_tag("maniac"),
        &[],
    )
    .unwrap();
    let flop_neutral =
        fold_chance(40.0, 100.0, Street::Flop, true, RivalStyle::Neutral, &[]).unwrap();
    assert_eq!(fallback, flop_neutral);
}

#[test]
fn fold_chance_is_pure() {
    let board = parse_cards("Qs 7d 2c").unwrap();
    let a = fold_chance(33.0, 60.0, Street::Flop, false, RivalStyle::Tag, &board).unwrap();
    let b = fold_chance(33.0, 60.0, Street::Flop, false, RivalStyle::Tag, &board).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn non_positive_pot_is_rejected() {
    assert_eq!(
        fold_chance(10.0, 0.0, Street::Flop, true, RivalStyle::Neutral, &[]),
        Err(AdvisorError::InvalidPot(0.0))
    );
}

#[test]
fn street_curves_follow_the_fold_table() {
    let logistic = |x: f64| 1.0 / (1.0 + (-x).exp());
    let table = [
        (Street::Preflop, -1.5, 1.8),
        (Street::Flop, -1.0, 2.0),
        (Street::Turn, -0.5, 2.2),
        (Street::River, 0.0, 2.5),
    ];
    for (street, alpha, beta) in table {
        for (bet, pot) in [(25.0, 100.0), (50.0, 100.0), (75.0, 100.0)] {
            let base = logistic(alpha + beta * (bet / pot));
            let oop = fold_chance(bet, pot, street, false, RivalStyle::Neutral, &[]).unwrap();
            let ip = fold_chance(bet, pot, street, true, RivalStyle::Neutral, &[]).unwrap();
            assert!((oop - (base + 0.05)).abs() < 1e-12, "{street} oop {oop} vs {base}");
            assert!((ip - (base - 0.05)).abs() < 1e-12, "{street} ip {ip} vs {base}");
        }
    }

    // half pot out of position against a neutral opponent
    let expected = [
        (Street::Preflop, 0.4043),
        (Street::Flop, 0.5500),
        (Street::Turn, 0.6957),
        (Street::River, 0.8273),
    ];
    for (street, value) in expected {
        let chance = fold_chance(50.0, 100.0, street, false, RivalStyle::Neutral, &[]).unwrap();
        assert!((chance - value).abs() < 1e-4, "{street}: {chance}");
    }
}
