use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        chat_service::ChatService,
        model_service::{GenerationClient, OpenAiCompatibleClient},
        quiz_service::QuizService,
        video_service::VideoService,
        youtube_client::YouTubeClient,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub chat_service: Arc<ChatService>,
    pub video_service: Arc<VideoService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client: Arc<dyn GenerationClient> = Arc::new(OpenAiCompatibleClient::new(&config));
        let youtube = config.youtube_api_key.clone().map(YouTubeClient::new);

        if youtube.is_none() {
            log::info!("YOUTUBE_API_KEY not set, video recommendations will link to search results");
        }

        Self::with_client(config, client, youtube)
    }

    /// Wires the services around an arbitrary generation client.
    pub fn with_client(
        config: Config,
        client: Arc<dyn GenerationClient>,
        youtube: Option<YouTubeClient>,
    ) -> Self {
        Self {
            quiz_service: Arc::new(QuizService::new(client.clone())),
            chat_service: Arc::new(ChatService::new(client.clone())),
            video_service: Arc::new(VideoService::new(client, youtube)),
            config: Arc::new(config),
        }
    }
}
