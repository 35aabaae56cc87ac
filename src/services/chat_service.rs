use std::sync::Arc;

use crate::{
    errors::AppResult,
    services::{model_service::GenerationClient, prompt_builder},
};

pub struct ChatService {
    client: Arc<dyn GenerationClient>,
}

impl ChatService {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self { client }
    }

    pub async fn answer(&self, message: &str, pdf_context: Option<&str>) -> AppResult<String> {
        log::info!(
            "Answering chat message (with PDF context: {})",
            pdf_context.is_some_and(|c| !c.trim().is_empty())
        );

        let prompt = prompt_builder::build_chat_prompt(message, pdf_context);
        self.client.generate(&prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::model_service::MockGenerationClient;

    #[actix_rt::test]
    async fn answer_passes_context_into_prompt_and_returns_reply() {
        let mut client = MockGenerationClient::new();
        client
            .expect_generate()
            .withf(|prompt| prompt.contains("Krebs cycle notes") && prompt.contains("What is NADH?"))
            .times(1)
            .returning(|_| Ok("NADH is an electron carrier.".to_string()));
        let service = ChatService::new(Arc::new(client));

        let reply = service
            .answer("What is NADH?", Some("Krebs cycle notes"))
            .await
            .unwrap();

        assert_eq!(reply, "NADH is an electron carrier.");
    }
}
