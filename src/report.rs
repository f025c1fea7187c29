//! Plain-text rendering of rankings, game outcomes and error notices

use crate::error::RankingError;
use crate::types::{GameOutcome, Player};
use std::fmt::Write;

/// Render the ranking table under a dated header
pub fn render_ranking(players: &[Player], date: &str) -> String {
    let mut out = format!("Ranking {}\n", date);
    if players.is_empty() {
        out.push_str("  (no players registered)\n");
        return out;
    }

    let width = players
        .iter()
        .map(|p| p.identifier.chars().count())
        .max()
        .unwrap_or(0)
        .max("Player".len());

    let _ = writeln!(out, "{:>4}  {:<width$}  {:>7}", "#", "Player", "Score");
    for (index, player) in players.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}  {:<width$}  {:>7}",
            index + 1,
            player.identifier,
            player.score
        );
    }
    out
}

/// Render the score changes caused by one game
pub fn render_outcome(outcome: &GameOutcome) -> String {
    format!(
        "{} beat {} by {}\n  {}: {} -> {} ({:+})\n  {}: {} -> {} ({:+})\n",
        outcome.winner.player_id,
        outcome.loser.player_id,
        outcome.margin,
        outcome.winner.player_id,
        outcome.winner.old_score,
        outcome.winner.new_score,
        outcome.winner.delta,
        outcome.loser.player_id,
        outcome.loser.old_score,
        outcome.loser.new_score,
        outcome.loser.delta
    )
}

/// Render an error as an alert-style notice
pub fn render_notice(error: &RankingError) -> String {
    format!("{}: {}", error.title(), error.notice())
}
