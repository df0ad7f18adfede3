use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::model::game::Game;
use crate::ranker::{self, RankMode, Tier};
use crate::schedule::{format_date, format_time, parse_date, parse_time};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub games: Vec<Game>,
    #[serde(default)]
    pub mode: RankMode,
    /// IANA zone used to decide what "today" means. Defaults to UTC.
    #[serde(default)]
    pub timezone: Option<String>,
    /// Pin the clock instead of reading it, for replays.
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

/// A game in display order, with the bucket it landed in and card-ready strings.
///
/// The game stays nested: backend columns may reuse the ranking field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedGame {
    pub game: Game,
    pub tier: Tier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    pub games: Vec<RankedGame>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HandlerError {
    UnknownTimeZone(String),
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandlerError::UnknownTimeZone(name) => write!(f, "Unknown time zone: {}", name),
        }
    }
}

impl std::error::Error for HandlerError {}

/// Rank the games in `request` as seen from `now_utc` (unless the request pins its own clock).
pub fn rank_request(request: Request, now_utc: DateTime<Utc>) -> Result<Response, HandlerError> {
    let tz: Tz = match request.timezone.as_deref() {
        Some(name) => name
            .parse()
            .map_err(|_| HandlerError::UnknownTimeZone(name.to_string()))?,
        None => Tz::UTC,
    };
    let now_local = request.now.unwrap_or(now_utc).with_timezone(&tz).naive_local();

    let games: Vec<RankedGame> = ranker::rank_with_tiers(&request.games, request.mode, now_local)
        .into_iter()
        .map(|(tier, game)| {
            let display_date = parse_date(&game.date).map(format_date);
            let display_time = game.time.as_deref().and_then(parse_time).map(format_time);
            RankedGame { game, tier, display_date, display_time }
        })
        .collect();

    let live = games.iter().filter(|g| g.tier == Tier::Live).count();
    let message = format!(
        "Ranked {} games ({} live) in {:?} mode for {} at {}.",
        games.len(),
        live,
        request.mode,
        tz.name(),
        now_local.format("%Y-%m-%d %H:%M")
    );
    Ok(Response { message, games })
}

#[instrument(skip(event), fields(count = event.payload.games.len(), mode = ?event.payload.mode))]
pub async fn handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    match rank_request(event.payload, Utc::now()) {
        Ok(response) => {
            info!(message = %response.message, "Ranked schedule");
            Ok(response)
        }
        Err(e) => {
            error!(error = %e, "Failed to rank schedule");
            Err(e.into())
        }
    }
}
