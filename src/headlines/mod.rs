// src/headlines/mod.rs
//! Headline sourcing — the live feed with a static tier underneath.
//!
//! Retrieval failure is never fatal: every problem with the feed is
//! classified, logged and answered with the fallback tips.

mod fallback;

pub use fallback::FallbackTips;

use crate::api::parser::parse_headlines;
use crate::api::{FeedQuery, NewsFeed};
use crate::constants::MAX_HEADLINES;
use crate::error::{classify_feed_error, FeedFailure};
use crate::pipeline::HeadlineSource;
use crate::types::{HeadlineSet, Provenance};

/// Headline source backed by a news feed, degrading to fallback tips.
pub struct FeedHeadlineSource<F> {
    feed: F,
    tips: FallbackTips,
}

impl<F: NewsFeed> FeedHeadlineSource<F> {
    pub fn new(feed: F, tips: FallbackTips) -> Self {
        Self { feed, tips }
    }

    fn fetch_live(&self, query: &FeedQuery, max_items: usize) -> Result<HeadlineSet, FeedFailure> {
        let response = self
            .feed
            .top_headlines(query)
            .map_err(|e| classify_feed_error(&e))?;
        let titles = parse_headlines(response, usize::from(query.page_size), max_items)?;
        HeadlineSet::new(titles, Provenance::Live).map_err(|e| FeedFailure::Malformed {
            cause: e.to_string(),
        })
    }
}

impl<F: NewsFeed> HeadlineSource for FeedHeadlineSource<F> {
    fn fetch(&self, query: &FeedQuery, max_items: usize) -> HeadlineSet {
        let max_items = max_items.clamp(1, MAX_HEADLINES);
        match self.fetch_live(query, max_items) {
            Ok(headlines) => {
                log::info!("Fetched {} live headline(s)", headlines.len());
                headlines
            }
            Err(FeedFailure::MissingCredential) => {
                log::info!("No news credential configured; using fallback tips");
                self.tips.select(max_items)
            }
            Err(reason) => {
                log::warn!("Headline feed unavailable ({}); using fallback tips", reason);
                self.tips.select(max_items)
            }
        }
    }
}
