//! Engine properties over grids of American odds.

use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use prizepicks_ev::error::OddsError;
use prizepicks_ev::odds::{
    american_to_implied_probability, classify_slips, evaluate_proposition, expected_value,
    remove_vig, Direction, SlipType, BREAK_EVEN_TABLE,
};

/// Quotes from -500 to -100 and +100 to +500 in steps of 5.
fn odds_grid() -> Vec<i32> {
    (-500..=-100)
        .step_by(5)
        .chain((100..=500).step_by(5))
        .collect()
}

fn tolerance() -> Decimal {
    Decimal::new(1, 20)
}

#[test]
fn fair_probabilities_sum_to_one() {
    for over in odds_grid() {
        for under in odds_grid() {
            let fair = remove_vig(over, under).unwrap();
            let sum = fair.over + fair.under;
            assert!(
                (sum - Decimal::ONE).abs() < tolerance(),
                "{over}/{under} summed to {sum}"
            );
            assert!(fair.over > Decimal::ZERO && fair.over < Decimal::ONE);
        }
    }
}

#[test]
fn swapping_sides_swaps_probabilities() {
    for over in odds_grid() {
        for under in odds_grid().into_iter().step_by(7) {
            let fair = remove_vig(over, under).unwrap();
            let swapped = remove_vig(under, over).unwrap();
            assert_eq!(fair.over, swapped.under);
            assert_eq!(fair.under, swapped.over);
        }
    }
}

#[test]
fn shorter_over_price_raises_over_probability() {
    let grid = odds_grid();
    for under in grid.iter().copied().step_by(11) {
        // Grid is ordered from the shortest favorite to the longest underdog.
        let probabilities: Vec<Decimal> = grid
            .iter()
            .map(|&over| remove_vig(over, under).unwrap().over)
            .collect();
        for pair in probabilities.windows(2) {
            assert!(pair[0] >= pair[1], "not monotone against under {under}");
        }
    }
}

#[test]
fn implied_probability_strictly_falls_with_price() {
    let favorites: Vec<Decimal> = (-500..=-100)
        .step_by(5)
        .map(|odds| american_to_implied_probability(odds).unwrap())
        .collect();
    for pair in favorites.windows(2) {
        assert!(pair[0] > pair[1], "{} !> {}", pair[0], pair[1]);
    }

    let underdogs: Vec<Decimal> = (100..=500)
        .step_by(5)
        .map(|odds| american_to_implied_probability(odds).unwrap())
        .collect();
    for pair in underdogs.windows(2) {
        assert!(pair[0] > pair[1], "{} !> {}", pair[0], pair[1]);
    }
}

#[test]
fn shorter_over_price_strictly_raises_over_probability() {
    let under = -110;
    let favorites: Vec<Decimal> = (-500..=-100)
        .step_by(5)
        .map(|over| remove_vig(over, under).unwrap().over)
        .collect();
    for pair in favorites.windows(2) {
        assert!(pair[0] > pair[1]);
    }
}

#[test]
fn ev_sign_follows_fair_probability() {
    for over in odds_grid().into_iter().step_by(3) {
        for under in odds_grid().into_iter().step_by(3) {
            let result = evaluate_proposition(over, under, &BREAK_EVEN_TABLE).unwrap();
            assert_eq!(result.expected_value, expected_value(result.fair_probability));
            assert!(result.expected_value >= Decimal::ZERO);
            assert_eq!(
                result.expected_value > Decimal::ZERO,
                result.fair_probability > dec!(0.5)
            );
        }
    }
}

#[test]
fn higher_probability_never_loses_slips() {
    let mut previous: BTreeSet<SlipType> = BTreeSet::new();
    let mut p = dec!(0.50);
    while p <= dec!(0.62) {
        let current = classify_slips(p, &BREAK_EVEN_TABLE);
        assert!(previous.is_subset(&current), "lost a slip at {p}");
        previous = current;
        p += dec!(0.0001);
    }
    assert_eq!(previous.len(), BREAK_EVEN_TABLE.len());
}

#[test]
fn favored_side_is_classified() {
    for over in odds_grid().into_iter().step_by(4) {
        for under in odds_grid().into_iter().step_by(4) {
            let result = evaluate_proposition(over, under, &BREAK_EVEN_TABLE).unwrap();
            let expected = if result.fair.over >= result.fair.under {
                Direction::Over
            } else {
                Direction::Under
            };
            assert_eq!(result.direction, expected);
            assert_eq!(
                result.qualifying_slips,
                classify_slips(result.fair_probability, &BREAK_EVEN_TABLE)
            );
        }
    }
}

#[test]
fn standard_vig_under_is_favored_but_below_every_slip() {
    let result = evaluate_proposition(-112, -118, &BREAK_EVEN_TABLE).unwrap();

    assert_eq!(result.direction, Direction::Under);
    assert_eq!(result.fair_probability.round_dp(4), dec!(0.5061));
    assert_eq!(result.expected_value.round_dp(4), dec!(0.0121));
    assert!(result.qualifying_slips.is_empty());
}

#[test]
fn underdog_over_favored_under_qualifies_flex() {
    let result = evaluate_proposition(110, -140, &BREAK_EVEN_TABLE).unwrap();

    assert_eq!(result.direction, Direction::Under);
    assert_eq!(result.fair_probability.round_dp(4), dec!(0.5506));
    assert_eq!(
        result.qualifying_slips,
        BTreeSet::from([SlipType::Flex5, SlipType::Flex6])
    );
}

#[test]
fn heavy_favorite_qualifies_all_but_three_flex() {
    let result = evaluate_proposition(-160, 130, &BREAK_EVEN_TABLE).unwrap();

    assert_eq!(result.direction, Direction::Over);
    assert_eq!(result.fair_probability.round_dp(4), dec!(0.5860));
    assert_eq!(result.qualifying_slips.len(), 6);
    assert!(!result.qualifies(SlipType::Flex3));
}

#[test]
fn even_line_ties_to_over() {
    let result = evaluate_proposition(-110, -110, &BREAK_EVEN_TABLE).unwrap();

    assert_eq!(result.direction, Direction::Over);
    assert_eq!(result.fair_probability, dec!(0.5));
    assert_eq!(result.expected_value, Decimal::ZERO);
    assert!(result.qualifying_slips.is_empty());
}

#[test]
fn invalid_quote_fails_without_affecting_others() {
    let props = [(-112, -118), (0, -110), (-50, 120), (-160, 130)];

    let results: Vec<_> = props
        .iter()
        .map(|&(o, u)| evaluate_proposition(o, u, &BREAK_EVEN_TABLE))
        .collect();

    assert!(results[0].is_ok());
    assert_eq!(results[1].as_ref().unwrap_err(), &OddsError::InvalidOdds(0));
    assert_eq!(results[2].as_ref().unwrap_err(), &OddsError::InvalidOdds(-50));
    assert_eq!(results[3].as_ref().unwrap().qualifying_slips.len(), 6);
}
