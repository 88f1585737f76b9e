//! Headline sourcing never fails; every feed problem degrades to tips.

mod common;

use common::*;
use newsposter::{FallbackTips, FeedHeadlineSource, HeadlineSource, Provenance};
use pretty_assertions::assert_eq;

fn tips() -> FallbackTips {
    FallbackTips::new(vec![
        "Drink water".to_string(),
        "Sleep eight hours".to_string(),
        "Donate blood".to_string(),
        "Walk daily".to_string(),
    ])
    .unwrap()
}

fn assert_fallback(feed: FakeFeed) {
    let source = FeedHeadlineSource::new(feed, tips());
    let set = source.fetch(&feed_query(), 3);
    assert_eq!(set.provenance(), Provenance::Fallback);
    assert_eq!(
        set.items(),
        &["Drink water", "Sleep eight hours", "Donate blood"].map(String::from)
    );
}

#[test]
fn missing_credential_yields_tips() {
    assert_fallback(FakeFeed::without_credential());
}

#[test]
fn server_error_yields_tips() {
    assert_fallback(FakeFeed::replying(503, "Service Unavailable"));
}

#[test]
fn unauthorized_yields_tips() {
    assert_fallback(FakeFeed::replying(
        401,
        r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid"}"#,
    ));
}

#[test]
fn non_json_body_yields_tips() {
    assert_fallback(FakeFeed::replying(200, "<html>captive portal</html>"));
}

#[test]
fn empty_article_list_yields_tips() {
    assert_fallback(FakeFeed::replying(200, r#"{"status":"ok","articles":[]}"#));
}

#[test]
fn untitled_articles_yield_tips() {
    assert_fallback(FakeFeed::replying(
        200,
        r#"{"status":"ok","articles":[{"title":null},{"title":"  "},{"title":"[Removed]"}]}"#,
    ));
}

#[test]
fn live_titles_are_capped_and_ordered() {
    let feed = FakeFeed::with_titles(&["One headline", "Two headline", "Three headline", "Four"]);
    let source = FeedHeadlineSource::new(feed, tips());
    let set = source.fetch(&feed_query(), 3);
    assert_eq!(set.provenance(), Provenance::Live);
    assert_eq!(
        set.items(),
        &["One headline", "Two headline", "Three headline"].map(String::from)
    );
}

#[test]
fn only_page_size_articles_are_scanned() {
    let mut query = feed_query();
    query.page_size = 2;
    let feed = FakeFeed::replying(
        200,
        r#"{"status":"ok","articles":[{"title":null},{"title":null},{"title":"Too deep"}]}"#,
    );
    let set = FeedHeadlineSource::new(feed, tips()).fetch(&query, 3);
    assert!(set.is_fallback());
}

#[test]
fn feed_is_called_once_per_fetch() {
    let feed = FakeFeed::without_credential();
    let source = FeedHeadlineSource::new(&feed, tips());
    source.fetch(&feed_query(), 3);
    assert_eq!(*feed.calls.borrow(), 1);
}
