use super::{ApiData, ApiFetcher};
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Issues one `POST /predict` carrying the text to classify.
pub struct PredictFetcher {
    client: reqwest::Client,
    base_url: String,
    text: String,
}

#[derive(Debug, Serialize)]
struct PredictPayload<'a> {
    text: &'a str,
}

// The backend pairs `{"error": ...}` bodies with non-2xx statuses, so the
// body alone decides the outcome and the status code is never consulted.
// A body carrying both fields counts as labeled.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PredictResponse {
    Labeled { sentiment: String },
    Failed { error: String },
}

impl PredictFetcher {
    pub fn new(client: reqwest::Client, base_url: String, text: String) -> Self {
        Self {
            client,
            base_url,
            text,
        }
    }

    fn request_url(&self) -> String {
        format!("{}/predict", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ApiFetcher for PredictFetcher {
    async fn fetch(&self) -> Result<ApiData> {
        let response = self
            .client
            .post(self.request_url())
            .json(&PredictPayload { text: &self.text })
            .send()
            .await?;

        let decoded: PredictResponse = response.json().await?;
        Ok(match decoded {
            PredictResponse::Labeled { sentiment } => ApiData::Sentiment(sentiment),
            PredictResponse::Failed { error } => ApiData::BackendError(error),
        })
    }
}
