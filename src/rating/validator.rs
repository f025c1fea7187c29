//! Final score validation
//!
//! A game is finished when one side reaches 11 with the opponent on 9 or less,
//! or, once both sides have reached 10, when one side leads by exactly two.

use crate::types::Game;
use crate::utils::score_margin;

/// Points needed to win a game outright
pub const WINNING_SCORE: u32 = 11;

/// Score both sides must reach before the game goes to deuce
pub const DEUCE_SCORE: u32 = WINNING_SCORE - 1;

/// Lead required to close out a deuce game
pub const WINNING_MARGIN: i64 = 2;

/// Check whether a raw score pair is a legally completed game
pub fn validate(home_score: u32, away_score: u32) -> bool {
    let straight_win = |winner: u32, loser: u32| {
        winner == WINNING_SCORE && loser <= WINNING_SCORE - WINNING_MARGIN as u32
    };
    if straight_win(home_score, away_score) || straight_win(away_score, home_score) {
        return true;
    }

    if home_score >= DEUCE_SCORE && away_score >= DEUCE_SCORE {
        return score_margin(home_score, away_score) == WINNING_MARGIN;
    }

    false
}

/// Check whether the scores of `game` form a legally completed game
pub fn validate_game(game: &Game) -> bool {
    validate(game.home_score, game.away_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_straight_wins() {
        assert!(validate(11, 0));
        assert!(validate(11, 9));
        assert!(validate(3, 11));
        assert!(validate(9, 11));
    }

    #[test]
    fn test_deuce_wins() {
        assert!(validate(12, 10));
        assert!(validate(10, 12));
        assert!(validate(13, 11));
        assert!(validate(25, 23));
    }

    #[test]
    fn test_unfinished_and_impossible_scores() {
        assert!(!validate(10, 8));
        assert!(!validate(8, 10));
        assert!(!validate(5, 3));
        assert!(!validate(11, 10));
        assert!(!validate(10, 10));
        assert!(!validate(11, 11));
        assert!(!validate(0, 0));
        assert!(!validate(12, 9));
        assert!(!validate(14, 11));
        assert!(!validate(15, 5));
    }

    #[test]
    fn test_validate_game() {
        assert!(validate_game(&Game::new("a", "b", 13, 11)));
        assert!(!validate_game(&Game::new("a", "b", 7, 7)));
    }

    proptest! {
        #![proptest_config(ProptestConfig { max_global_rejects: 65_536, ..ProptestConfig::default() })]

        #[test]
        fn prop_eleven_against_nine_or_less_is_valid(loser in 0u32..=9, home_wins in any::<bool>()) {
            if home_wins {
                prop_assert!(validate(11, loser));
            } else {
                prop_assert!(validate(loser, 11));
            }
        }

        #[test]
        fn prop_deuce_valid_iff_margin_two(home in 10u32..200, away in 10u32..200) {
            let margin = (i64::from(home) - i64::from(away)).abs();
            prop_assert_eq!(validate(home, away), margin == 2);
        }

        #[test]
        fn prop_everything_else_is_invalid(home in 0u32..200, away in 0u32..200) {
            let straight = (home == 11 && away <= 9) || (away == 11 && home <= 9);
            let deuce = home >= 10 && away >= 10;
            prop_assume!(!straight && !deuce);
            prop_assert!(!validate(home, away));
        }

        #[test]
        fn prop_validation_is_symmetric(home in 0u32..200, away in 0u32..200) {
            prop_assert_eq!(validate(home, away), validate(away, home));
        }
    }
}
