use serde::{Deserialize, Serialize};

/// What the model is asked to produce for each suggested video.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecommendation {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub search_query: String,
    #[serde(default)]
    pub channel: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub channel_title: String,
    pub published_at: String,
    pub url: String,
    pub search_query: String,
}
