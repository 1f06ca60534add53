#![expect(clippy::unwrap_used, clippy::indexing_slicing)]

mod io;

use super::clean_df;
use super::types::{
    CRITIC_SCORE, EU_SALES, GENRE, GLOBAL_SALES, JP_SALES, NA_SALES, NAME, PLATFORM, PUBLISHER,
    USER_SCORE, YEAR,
};
use anyhow::Result;
use polars::prelude::*;

/// One raw input row. Scores are text so the cleaner's coercion path runs.
#[derive(Clone)]
pub(super) struct Game {
    pub name: &'static str,
    pub platform: &'static str,
    pub year: Option<f64>,
    pub genre: Option<&'static str>,
    pub publisher: Option<&'static str>,
    pub na: f64,
    pub eu: f64,
    pub jp: f64,
    pub global: f64,
    pub critic: Option<&'static str>,
    pub user: Option<&'static str>,
}

impl Default for Game {
    fn default() -> Self {
        Self {
            name: "Untitled",
            platform: "PS2",
            year: Some(2006.0),
            genre: Some("Action"),
            publisher: Some("Nintendo"),
            na: 0.0,
            eu: 0.0,
            jp: 0.0,
            global: 0.0,
            critic: None,
            user: None,
        }
    }
}

pub(super) fn raw_frame(games: &[Game]) -> Result<DataFrame> {
    let df = df!(
        NAME => games.iter().map(|g| g.name).collect::<Vec<_>>(),
        PLATFORM => games.iter().map(|g| g.platform).collect::<Vec<_>>(),
        YEAR => games.iter().map(|g| g.year).collect::<Vec<_>>(),
        GENRE => games.iter().map(|g| g.genre).collect::<Vec<_>>(),
        PUBLISHER => games.iter().map(|g| g.publisher).collect::<Vec<_>>(),
        NA_SALES => games.iter().map(|g| g.na).collect::<Vec<_>>(),
        EU_SALES => games.iter().map(|g| g.eu).collect::<Vec<_>>(),
        JP_SALES => games.iter().map(|g| g.jp).collect::<Vec<_>>(),
        GLOBAL_SALES => games.iter().map(|g| g.global).collect::<Vec<_>>(),
        CRITIC_SCORE => games.iter().map(|g| g.critic).collect::<Vec<_>>(),
        USER_SCORE => games.iter().map(|g| g.user).collect::<Vec<_>>()
    )?;
    Ok(df)
}

pub(super) fn cleaned_frame(games: &[Game]) -> Result<DataFrame> {
    Ok(clean_df(raw_frame(games)?)?)
}

/// Rows with the given genre and global sales, everything else default.
pub(super) fn genre_sales(rows: &[(&'static str, f64)]) -> Vec<Game> {
    rows.iter()
        .map(|&(genre, global)| Game {
            genre: Some(genre),
            global,
            ..Default::default()
        })
        .collect()
}

pub(super) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
