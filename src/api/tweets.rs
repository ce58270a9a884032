use super::{AnalyzedTweet, ApiData, ApiFetcher};
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// Issues one `GET /tweets` for a user's recent tweets, each already
/// labeled by the backend.
pub struct TweetsFetcher {
    client: reqwest::Client,
    base_url: String,
    username: String,
    count: u32,
}

// Success and error bodies share the status-agnostic handling described in
// predict.rs. The backend may attach extra fields ("cached", "body" on
// upstream failures); those are ignored.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TweetsResponse {
    Listed { tweets: Vec<AnalyzedTweet> },
    Failed { error: String },
}

impl TweetsFetcher {
    pub fn new(client: reqwest::Client, base_url: String, username: String, count: u32) -> Self {
        Self {
            client,
            base_url,
            username,
            count,
        }
    }
}

/// Usernames come straight from an input field and can carry characters
/// that need escaping in a query string.
fn request_url(base_url: &str, username: &str, count: u32) -> String {
    format!(
        "{}/tweets?username={}&count={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(username),
        count,
    )
}

#[async_trait]
impl ApiFetcher for TweetsFetcher {
    async fn fetch(&self) -> Result<ApiData> {
        let url = request_url(&self.base_url, &self.username, self.count);
        let response = self.client.get(&url).send().await?;

        let decoded: TweetsResponse = response.json().await?;
        Ok(match decoded {
            TweetsResponse::Listed { tweets } => ApiData::Tweets(tweets),
            TweetsResponse::Failed { error } => ApiData::BackendError(error),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url() {
        assert_eq!(
            request_url("http://127.0.0.1:5000", "jack", 10),
            "http://127.0.0.1:5000/tweets?username=jack&count=10"
        );
    }

    #[test]
    fn test_request_url_trims_trailing_slash() {
        assert_eq!(
            request_url("http://127.0.0.1:5000/", "jack", 10),
            "http://127.0.0.1:5000/tweets?username=jack&count=10"
        );
    }

    #[test]
    fn test_request_url_encodes_username() {
        assert_eq!(
            request_url("http://127.0.0.1:5000", "@some user", 10),
            "http://127.0.0.1:5000/tweets?username=%40some%20user&count=10"
        );
    }

    #[test]
    fn test_request_url_carries_count() {
        assert_eq!(
            request_url("http://127.0.0.1:5000", "jack", 25),
            "http://127.0.0.1:5000/tweets?username=jack&count=25"
        );
    }

    #[test]
    fn test_decode_tweets_in_order() {
        let decoded: TweetsResponse = serde_json::from_str(
            r#"{"tweets":[
                {"text":"first","sentiment":"Positive"},
                {"text":"second","sentiment":"Negative"},
                {"text":"third","sentiment":"Positive"}
            ]}"#,
        )
        .unwrap();

        match decoded {
            TweetsResponse::Listed { tweets } => {
                assert_eq!(tweets.len(), 3);
                assert_eq!(tweets[0].text, "first");
                assert_eq!(tweets[1].sentiment, "Negative");
                assert_eq!(tweets[2].text, "third");
            }
            TweetsResponse::Failed { .. } => panic!("expected a tweet list"),
        }
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let decoded: TweetsResponse = serde_json::from_str(
            r#"{"tweets":[{"text":"hi","sentiment":"Positive"}],"cached":true}"#,
        )
        .unwrap();
        assert!(matches!(decoded, TweetsResponse::Listed { tweets } if tweets.len() == 1));
    }

    #[test]
    fn test_decode_empty_list() {
        let decoded: TweetsResponse = serde_json::from_str(r#"{"tweets":[]}"#).unwrap();
        assert!(matches!(decoded, TweetsResponse::Listed { tweets } if tweets.is_empty()));
    }

    #[test]
    fn test_decode_error_body() {
        let decoded: TweetsResponse =
            serde_json::from_str(r#"{"error":"BEARER_TOKEN not set","body":"..."}"#).unwrap();
        assert!(matches!(decoded, TweetsResponse::Failed { error } if error == "BEARER_TOKEN not set"));
    }

    #[test]
    fn test_decode_rejects_body_with_neither_field() {
        assert!(serde_json::from_str::<TweetsResponse>(r#"{"ok":true}"#).is_err());
    }
}
