pub mod predict;
pub mod tweets;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// Outcome of one backend call, routed back to the panel that issued it.
/// The generation lets the receiver drop responses that were overtaken by
/// a newer submission for the same panel.
#[derive(Debug, Clone)]
pub struct ApiMessage {
    pub widget_id: String,
    pub generation: u64,
    pub data: ApiData,
}

#[derive(Debug, Clone)]
pub enum ApiData {
    Loading,
    Sentiment(String),
    Tweets(Vec<AnalyzedTweet>),
    BackendError(String),
    ConnectionFailed,
}

/// One tweet as the backend returns it: the text plus the label its model
/// assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzedTweet {
    pub text: String,
    pub sentiment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    Predict { text: String },
    Tweets { username: String, count: u32 },
}

impl ApiRequest {
    pub fn into_fetcher(self, client: reqwest::Client, base_url: String) -> Box<dyn ApiFetcher> {
        match self {
            ApiRequest::Predict { text } => {
                Box::new(predict::PredictFetcher::new(client, base_url, text))
            }
            ApiRequest::Tweets { username, count } => {
                Box::new(tweets::TweetsFetcher::new(client, base_url, username, count))
            }
        }
    }
}

#[async_trait]
pub trait ApiFetcher: Send + Sync {
    async fn fetch(&self) -> Result<ApiData>;
}

/// Collapse a finished fetch into something renderable. Every transport
/// failure surfaces as the same connection error; the underlying detail is
/// dropped here.
pub fn fetch_outcome(result: Result<ApiData>) -> ApiData {
    result.unwrap_or(ApiData::ConnectionFailed)
}
