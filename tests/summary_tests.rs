mod common;

use common::{FakeAi, FakeExtractor, recorded};
use rtjc_relay::core::SummaryItem;
use rtjc_relay::errors::RelayError;
use rtjc_relay::summary::{LinkSummarizer, Summarizer, SummaryCache};
use rtjc_relay::telegram::render_summary;

#[tokio::test]
async fn test_summary_composes_title_and_generated_body() {
    let extractor = FakeExtractor::new("Title", "Article body");
    let ai = FakeAi::answering("ai summary");
    let ai_calls = ai.calls.clone();

    let mut summarizer =
        Summarizer::new(Box::new(extractor), Box::new(ai), SummaryCache::in_memory());
    let rendered = summarizer.summary("https://example.com").await.unwrap();

    assert_eq!(rendered, "Title\n\nai summary");
    assert_eq!(recorded(&ai_calls), vec!["Title - Article body".to_string()]);
}

#[tokio::test]
async fn test_cache_hit_makes_no_network_calls() {
    let extractor = FakeExtractor::new("Title", "Article body");
    let extractor_calls = extractor.calls.clone();
    let ai = FakeAi::answering("ai summary");
    let ai_calls = ai.calls.clone();

    let mut summarizer =
        Summarizer::new(Box::new(extractor), Box::new(ai), SummaryCache::in_memory());
    let first = summarizer.summary("https://example.com").await.unwrap();
    let second = summarizer.summary("https://example.com").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(recorded(&extractor_calls).len(), 1);
    assert_eq!(recorded(&ai_calls).len(), 1);
    assert_eq!(summarizer.cache().len(), 1);
}

#[tokio::test]
async fn test_cache_keys_are_exact_strings() {
    let extractor = FakeExtractor::new("Title", "Body");
    let extractor_calls = extractor.calls.clone();
    let mut summarizer = Summarizer::new(
        Box::new(extractor),
        Box::new(FakeAi::answering("ai summary")),
        SummaryCache::in_memory(),
    );

    summarizer.summary("https://example.com").await.unwrap();
    summarizer.summary("https://example.com/").await.unwrap();

    assert_eq!(recorded(&extractor_calls).len(), 2);
    assert_eq!(summarizer.cache().len(), 2);
}

#[tokio::test]
async fn test_empty_title_yields_empty_result_and_is_not_cached() {
    let extractor = FakeExtractor::new("", "Article body");
    let extractor_calls = extractor.calls.clone();
    let mut summarizer = Summarizer::new(
        Box::new(extractor),
        Box::new(FakeAi::answering("ai summary")),
        SummaryCache::in_memory(),
    );

    assert_eq!(summarizer.summary("https://example.com").await.unwrap(), "");
    assert!(summarizer.cache().is_empty());

    assert_eq!(summarizer.summary("https://example.com").await.unwrap(), "");
    assert_eq!(recorded(&extractor_calls).len(), 2);
}

#[tokio::test]
async fn test_empty_generated_body_is_not_cached() {
    let mut summarizer = Summarizer::new(
        Box::new(FakeExtractor::new("Title", "Article body")),
        Box::new(FakeAi::answering("")),
        SummaryCache::in_memory(),
    );

    assert_eq!(summarizer.summary("https://example.com").await.unwrap(), "");
    assert!(summarizer.cache().is_empty());
}

#[tokio::test]
async fn test_ai_failure_is_wrapped_with_link() {
    let mut summarizer = Summarizer::new(
        Box::new(FakeExtractor::new("Title", "Article body")),
        Box::new(FakeAi::failing("model unavailable")),
        SummaryCache::in_memory(),
    );

    let err = summarizer.summary("https://example.com").await.unwrap_err();
    match &err {
        RelayError::Summary { link, source } => {
            assert_eq!(link, "https://example.com");
            assert!(matches!(**source, RelayError::OpenAIError(_)));
        }
        other => panic!("Unexpected error type: {other:?}"),
    }
    assert!(err.to_string().contains("model unavailable"));
    assert!(summarizer.cache().is_empty());
}

#[tokio::test]
async fn test_snapshot_is_written_and_reloaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache_openai.json");

    let mut summarizer = Summarizer::new(
        Box::new(FakeExtractor::new("Title", "Body")),
        Box::new(FakeAi::answering("ai summary")),
        SummaryCache::with_snapshot(&path),
    );
    let rendered = summarizer.summary("https://example.com").await.unwrap();
    assert!(path.exists());

    let extractor = FakeExtractor::new("Other", "Other");
    let extractor_calls = extractor.calls.clone();
    let mut reloaded = Summarizer::new(
        Box::new(extractor),
        Box::new(FakeAi::answering("different")),
        SummaryCache::with_snapshot(&path),
    );
    assert_eq!(reloaded.summary("https://example.com").await.unwrap(), rendered);
    assert!(recorded(&extractor_calls).is_empty());
}

#[test]
fn test_legacy_snapshot_keys_are_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache_openai.json");
    std::fs::write(
        &path,
        r#"{"Summaries": {"https://example.com": {"Title": "Old", "Content": "cached"}}}"#,
    )
    .unwrap();

    let cache = SummaryCache::with_snapshot(&path);
    assert_eq!(
        cache.get("https://example.com"),
        Some(&SummaryItem::new("Old", "cached"))
    );
    assert_eq!(
        render_summary(cache.get("https://example.com").unwrap()),
        "Old\n\ncached"
    );
}

#[test]
fn test_corrupt_or_missing_snapshot_starts_empty() {
    let dir = tempfile::tempdir().unwrap();

    let missing = SummaryCache::with_snapshot(dir.path().join("absent.json"));
    assert!(missing.is_empty());
    assert!(missing.is_persistent());

    let corrupt_path = dir.path().join("corrupt.json");
    std::fs::write(&corrupt_path, "{not json").unwrap();
    assert!(SummaryCache::with_snapshot(&corrupt_path).is_empty());
}

#[tokio::test]
async fn test_persistence_failure_is_not_surfaced() {
    let dir = tempfile::tempdir().unwrap();
    // a directory path cannot be written as a file
    let mut summarizer = Summarizer::new(
        Box::new(FakeExtractor::new("Title", "Body")),
        Box::new(FakeAi::answering("ai summary")),
        SummaryCache::with_snapshot(dir.path()),
    );

    let rendered = summarizer.summary("https://example.com").await.unwrap();
    assert_eq!(rendered, "Title\n\nai summary");
    assert_eq!(summarizer.cache().len(), 1);
}
