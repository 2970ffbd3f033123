use anyhow::{Result, anyhow};
use std::sync::Arc;
use tracing::{error, info};

use rtjc_relay::LlmClient;
use rtjc_relay::api::RtjcListener;
use rtjc_relay::comments::{RankingPolicy, RemarkClient, ThreadPattern};
use rtjc_relay::core::{AppConfig, PinClassifier};
use rtjc_relay::summary::{ExtractionClient, ExtractionSchema, Summarizer, SummaryCache};
use rtjc_relay::telegram::{Submitter, TelegramClient, TelegramSubmitter};
use rtjc_relay::utils::http::build_http_client;
use rtjc_relay::worker::EnrichmentRouter;

#[tokio::main]
async fn main() -> Result<()> {
    rtjc_relay::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        anyhow!("config error: {e}")
    })?;
    let http = build_http_client(config.http_timeout);

    let telegram = TelegramClient::new(
        http.clone(),
        &config.telegram_api_url,
        config.telegram_token.clone(),
        config.telegram_chat_id.clone(),
    );
    let submitter: Arc<dyn Submitter> = Arc::new(TelegramSubmitter::spawn(telegram));

    let cache = match &config.summary_cache_file {
        Some(path) => {
            info!("Summary cache persisted to {}", path.display());
            SummaryCache::with_snapshot(path.clone())
        }
        None => SummaryCache::in_memory(),
    };
    let extractor = ExtractionClient::new(
        http.clone(),
        &config.extractor_api_url,
        &config.extractor_token,
        ExtractionSchema {
            title_field: config.extractor_title_field.clone(),
            content_field: config.extractor_content_field.clone(),
        },
    );
    let llm = LlmClient::new(
        http.clone(),
        &config.openai_api_url,
        config.openai_api_key.clone(),
        config.openai_org_id.clone(),
        config.openai_model.clone(),
    );
    let summarizer = Summarizer::new(Box::new(extractor), Box::new(llm), cache);

    let comments = RemarkClient::new(
        http,
        &config.remark_api_url,
        &config.remark_site,
        RankingPolicy {
            include_negative: config.comments_include_negative,
        },
    );

    let router = EnrichmentRouter::new(
        Box::new(summarizer),
        Arc::new(comments),
        ThreadPattern::new(&config.thread_host)?,
        &config.summary_marker,
    );

    let listener = RtjcListener::new(config.port, PinClassifier::default(), submitter, router);
    if let Err(e) = listener.listen().await {
        error!("Listener stopped: {}", e);
        return Err(e.into());
    }
    Ok(())
}
