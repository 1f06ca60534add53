//! # Video Game Sales Insights
//!
//! Loads a table of video game sales records and summarises it: sales by
//! genre, regional share by genre, the biggest publishers over time, platform
//! lifecycles, and how critic scores relate to sales.
//!
//! ## Quick Start
//!
//! ```no_run
//! use vgsales_insights::analyser::logic;
//! use vgsales_insights::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::default().with_data_path("video_games.csv");
//! let run = logic::analyse_file_flow(&config)?;
//!
//! for genre in &run.insights.top_genres {
//!     println!("{}: {:.2}M", genre.genre, genre.total_sales);
//! }
//! # Ok::<(), vgsales_insights::error::AnalyserError>(())
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! load_df ──> clean_df ──> analyse_df ──> build_insights ──> format_report
//!                               │
//!                               └──> ChartData ──> show_charts
//! ```
//!
//! Loading is the only I/O step. Everything after it is a pure function of
//! the cleaned `DataFrame`, so each view can be tested from an in-memory
//! frame.
//!
//! ## Core Modules
//!
//! - [`analyser::logic`]: data pipeline and report
//! - [`analyser::gui`]: chart window (eframe + `egui_plot`)
//! - [`config`]: run settings
//! - [`error`]: error types
//! - [`logging`]: logger setup

#![warn(clippy::all, rust_2018_idioms)]

pub mod analyser;
pub mod config;
pub mod error;
pub mod logging;
pub mod theme;
pub mod utils;
