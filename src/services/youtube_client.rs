use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Video,
};

const YOUTUBE_SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";
const EDUCATION_CATEGORY_ID: &str = "27";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    #[serde(default)]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    thumbnails: Thumbnails,
    #[serde(default)]
    channel_title: String,
    #[serde(default)]
    published_at: String,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    high: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

/// YouTube Data API search, restricted to high-definition education videos.
pub struct YouTubeClient {
    http: reqwest::Client,
    api_key: SecretString,
    search_url: String,
}

impl YouTubeClient {
    pub fn new(api_key: SecretString) -> Self {
        Self::with_search_url(api_key, YOUTUBE_SEARCH_URL)
    }

    pub fn with_search_url(api_key: SecretString, search_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            search_url: search_url.into(),
        }
    }

    pub async fn search(&self, query: &str, max_results: u8) -> AppResult<Vec<Video>> {
        let response = self.fetch(query, max_results).await.map_err(|e| {
            // The request URL carries the API key.
            AppError::UpstreamError(format!("YouTube search failed: {}", e.without_url()))
        })?;

        Ok(videos_from_search(response, query))
    }

    async fn fetch(&self, query: &str, max_results: u8) -> reqwest::Result<SearchResponse> {
        let max_results = max_results.to_string();
        self.http
            .get(&self.search_url)
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("maxResults", max_results.as_str()),
                ("key", self.api_key.expose_secret()),
                ("videoCategoryId", EDUCATION_CATEGORY_ID),
                ("videoDefinition", "high"),
                ("relevanceLanguage", "en"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

fn videos_from_search(response: SearchResponse, query: &str) -> Vec<Video> {
    response
        .items
        .into_iter()
        .filter_map(|item| {
            let video_id = item.id.video_id?;
            let thumbnail = item
                .snippet
                .thumbnails
                .high
                .or(item.snippet.thumbnails.default)
                .map(|t| t.url)
                .unwrap_or_default();

            Some(Video {
                url: format!("https://www.youtube.com/watch?v={}", video_id),
                id: video_id,
                title: item.snippet.title,
                description: item.snippet.description,
                thumbnail,
                channel_title: item.snippet.channel_title,
                published_at: item.snippet.published_at,
                search_query: query.to_string(),
            })
        })
        .collect()
}
