use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use futures::future::join_all;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Video, VideoRecommendation},
    services::{
        json_extractor, model_service::GenerationClient, prompt_builder,
        youtube_client::YouTubeClient,
    },
};

const YOUTUBE_RESULTS_URL: &str = "https://www.youtube.com/results";
const PLACEHOLDER_THUMBNAIL: &str = "https://img.youtube.com/vi/0/hqdefault.jpg";

pub struct VideoService {
    client: Arc<dyn GenerationClient>,
    youtube: Option<YouTubeClient>,
}

pub fn search_results_url(query: &str) -> AppResult<String> {
    reqwest::Url::parse_with_params(YOUTUBE_RESULTS_URL, &[("search_query", query)])
        .map(|url| url.to_string())
        .map_err(|e| AppError::InternalError(format!("Failed to build search URL: {}", e)))
}

/// A video entry that points at YouTube search results for the recommendation.
pub fn search_result_video(
    index: usize,
    recommendation: VideoRecommendation,
    published_at: &str,
) -> AppResult<Video> {
    Ok(Video {
        id: format!("vid-{}", index),
        url: search_results_url(&recommendation.search_query)?,
        title: recommendation.title,
        description: recommendation.description,
        thumbnail: PLACEHOLDER_THUMBNAIL.to_string(),
        channel_title: recommendation.channel,
        published_at: published_at.to_string(),
        search_query: recommendation.search_query,
    })
}

impl VideoService {
    pub fn new(client: Arc<dyn GenerationClient>, youtube: Option<YouTubeClient>) -> Self {
        Self { client, youtube }
    }

    pub async fn recommend(&self, pdf_text: &str) -> AppResult<Vec<Video>> {
        let prompt = prompt_builder::build_video_prompt(pdf_text);
        let raw = self.client.generate(&prompt).await?;
        let recommendations: Vec<VideoRecommendation> = json_extractor::extract_items(&raw)?;

        log::info!("Model suggested {} videos", recommendations.len());

        let published_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let fallbacks = recommendations
            .into_iter()
            .enumerate()
            .map(|(index, rec)| search_result_video(index, rec, &published_at))
            .collect::<AppResult<Vec<Video>>>()?;

        match &self.youtube {
            Some(youtube) => Ok(join_all(
                fallbacks
                    .into_iter()
                    .map(|fallback| Self::resolve(youtube, fallback)),
            )
            .await),
            None => Ok(fallbacks),
        }
    }

    /// Swaps a search-results entry for the top real video, keeping the
    /// fallback when the lookup fails or finds nothing.
    async fn resolve(youtube: &YouTubeClient, fallback: Video) -> Video {
        match youtube.search(&fallback.search_query, 1).await {
            Ok(found) => found.into_iter().next().unwrap_or(fallback),
            Err(e) => {
                log::warn!(
                    "YouTube lookup for '{}' failed, using search link: {}",
                    fallback.search_query,
                    e
                );
                fallback
            }
        }
    }
}
