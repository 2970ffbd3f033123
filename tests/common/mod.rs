#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::{Arc, Mutex};

use rtjc_relay::comments::{CommentSource, ThreadLink};
use rtjc_relay::core::{Comment, CommentUser};
use rtjc_relay::errors::RelayError;
use rtjc_relay::summary::{ContentExtractor, ExtractedContent, LinkSummarizer, TextSummarizer};
use rtjc_relay::telegram::Submitter;

pub type Calls = Arc<Mutex<Vec<String>>>;

pub fn recorded(calls: &Calls) -> Vec<String> {
    calls.lock().unwrap().clone()
}

pub fn ts(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 4, 4, 10, minute, 0).unwrap()
}

pub fn comment(user: &str, text: &str, score: i64) -> Comment {
    Comment {
        text: text.to_string(),
        user: CommentUser {
            name: user.to_string(),
            verified: true,
            ..CommentUser::default()
        },
        score,
        timestamp: ts(0),
        ..Comment::default()
    }
}

/// Link summarizer answering every call with the same closure.
pub struct FakeSummarizer {
    pub calls: Calls,
    respond: Box<dyn Fn(&str) -> Result<String, RelayError> + Send + Sync>,
}

impl FakeSummarizer {
    pub fn new<F>(respond: F) -> Self
    where
        F: Fn(&str) -> Result<String, RelayError> + Send + Sync + 'static,
    {
        Self {
            calls: Calls::default(),
            respond: Box::new(respond),
        }
    }

    pub fn returning(summary: &str) -> Self {
        let summary = summary.to_string();
        Self::new(move |_| Ok(summary.clone()))
    }
}

#[async_trait]
impl LinkSummarizer for FakeSummarizer {
    async fn summary(&mut self, link: &str) -> Result<String, RelayError> {
        self.calls.lock().unwrap().push(link.to_string());
        (self.respond)(link)
    }
}

pub struct FakeComments {
    pub calls: Calls,
    result: Mutex<Option<Result<Vec<Comment>, RelayError>>>,
}

impl FakeComments {
    pub fn returning(result: Result<Vec<Comment>, RelayError>) -> Self {
        Self {
            calls: Calls::default(),
            result: Mutex::new(Some(result)),
        }
    }
}

#[async_trait]
impl CommentSource for FakeComments {
    async fn top_comments(&self, thread: &ThreadLink) -> Result<Vec<Comment>, RelayError> {
        self.calls.lock().unwrap().push(thread.as_str().to_string());
        self.result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

pub struct FakeExtractor {
    pub calls: Calls,
    pub title: String,
    pub content: String,
}

impl FakeExtractor {
    pub fn new(title: &str, content: &str) -> Self {
        Self {
            calls: Calls::default(),
            title: title.to_string(),
            content: content.to_string(),
        }
    }
}

#[async_trait]
impl ContentExtractor for FakeExtractor {
    async fn extract(&self, link: &str) -> Result<ExtractedContent, RelayError> {
        self.calls.lock().unwrap().push(link.to_string());
        Ok(ExtractedContent {
            title: self.title.clone(),
            content: self.content.clone(),
        })
    }
}

pub struct FakeAi {
    pub calls: Calls,
    pub answer: Result<String, String>,
}

impl FakeAi {
    pub fn answering(answer: &str) -> Self {
        Self {
            calls: Calls::default(),
            answer: Ok(answer.to_string()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: Calls::default(),
            answer: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl TextSummarizer for FakeAi {
    async fn summarize(&self, text: &str) -> Result<String, RelayError> {
        self.calls.lock().unwrap().push(text.to_string());
        self.answer.clone().map_err(RelayError::OpenAIError)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Text(String, bool),
    Html(String, bool),
    Wait,
}

#[derive(Default)]
pub struct RecordingSubmitter {
    events: Mutex<Vec<Event>>,
}

impl RecordingSubmitter {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl Submitter for RecordingSubmitter {
    async fn submit(&self, text: &str, pin: bool) -> Result<(), RelayError> {
        self.events
            .lock()
            .unwrap()
            .push(Event::Text(text.to_string(), pin));
        Ok(())
    }

    async fn submit_html(&self, text: &str, pin: bool) -> Result<(), RelayError> {
        self.events
            .lock()
            .unwrap()
            .push(Event::Html(text.to_string(), pin));
        Ok(())
    }

    async fn wait_message_queue(&self) {
        self.events.lock().unwrap().push(Event::Wait);
    }
}
