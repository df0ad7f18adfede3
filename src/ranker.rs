//! Display ordering for game schedules.
//!
//! Games are bucketed into a [`Tier`] and then ordered chronologically within
//! each tier. Two bucketing policies exist, selected with [`RankMode`].

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::model::game::{Game, GameStatus};
use crate::schedule::scheduled_at;

/// Bucketing policy used by [`rank`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankMode {
    /// Live, then today or upcoming, then everything else.
    Simple,
    /// Adds a next-hour bucket and sends completed games to the very end.
    #[default]
    Detailed,
}

/// Priority bucket. Variants are declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Live,
    Today,
    NextHour,
    Upcoming,
    Past,
    Completed,
}

impl Tier {
    /// Numeric rank of the bucket; lower is shown first.
    pub fn weight(self) -> f32 {
        match self {
            Tier::Live => 1.0,
            Tier::Today => 2.0,
            Tier::NextHour => 2.5,
            Tier::Upcoming => 3.0,
            Tier::Past => 4.0,
            Tier::Completed => 5.0,
        }
    }
}

/// Bucket a game whose combined date-time is `at`, relative to `now`.
fn classify_at(game: &Game, at: NaiveDateTime, mode: RankMode, now: NaiveDateTime) -> Tier {
    let same_day = at.date() == now.date();
    match mode {
        RankMode::Simple => {
            let pending = matches!(game.status, GameStatus::Scheduled | GameStatus::Live);
            if game.status == GameStatus::Live {
                Tier::Live
            } else if same_day || (pending && at >= now) {
                Tier::Today
            } else {
                Tier::Past
            }
        }
        RankMode::Detailed => {
            let until = at - now;
            if game.status == GameStatus::Live {
                Tier::Live
            } else if game.status == GameStatus::Completed {
                Tier::Completed
            } else if same_day {
                Tier::Today
            } else if until >= Duration::zero() && until <= Duration::hours(1) {
                Tier::NextHour
            } else if at > now {
                Tier::Upcoming
            } else {
                Tier::Past
            }
        }
    }
}

/// Priority bucket of a single game at local wall-clock time `now`.
pub fn classify(game: &Game, mode: RankMode, now: NaiveDateTime) -> Tier {
    classify_at(game, scheduled_at(game), mode, now)
}

/// Order games for display, returning each game with its bucket.
///
/// The sort is stable: games with the same bucket and instant keep their input order.
#[instrument(level = "debug", skip(games), fields(count = games.len()))]
pub fn rank_with_tiers(games: &[Game], mode: RankMode, now: NaiveDateTime) -> Vec<(Tier, Game)> {
    let mut keyed: Vec<(Tier, NaiveDateTime, &Game)> = games
        .iter()
        .map(|g| {
            let at = scheduled_at(g);
            (classify_at(g, at, mode, now), at, g)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));
    keyed.into_iter().map(|(tier, _, g)| (tier, g.clone())).collect()
}

/// Order games for display: by bucket, then by scheduled date-time.
///
/// `now` is the caller's local wall-clock time; the input is left untouched and
/// the result is always a permutation of it.
pub fn rank(games: &[Game], mode: RankMode, now: NaiveDateTime) -> Vec<Game> {
    rank_with_tiers(games, mode, now).into_iter().map(|(_, g)| g).collect()
}
