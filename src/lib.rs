//! Logocrawl - tournament logo acquisition tool.
//!
//! Crawls region pages on a flashscore-style site, follows each region's
//! tournament menu links, and downloads every tournament's logo into a
//! per-region folder. The filesystem is the only persisted state: an image
//! already on disk is never fetched again, which makes re-runs cheap and
//! interrupted runs resumable.

pub mod cli;
pub mod config;
pub mod models;
pub mod scrapers;
pub mod services;
pub mod utils;
