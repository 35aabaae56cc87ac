use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::domain::{Question, QuizBlueprint},
    services::{json_extractor, model_service::GenerationClient, prompt_builder},
};

pub struct QuizService {
    client: Arc<dyn GenerationClient>,
}

impl QuizService {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self { client }
    }

    /// Builds the prompt, asks the model, and recovers the question array.
    pub async fn generate_quiz(&self, blueprint: &QuizBlueprint) -> AppResult<Vec<Question>> {
        log::info!(
            "Generating {} {} questions from {} characters of source text",
            blueprint.question_count,
            blueprint.quiz_type,
            blueprint.source_text.chars().count()
        );

        let prompt = prompt_builder::build_quiz_prompt(blueprint);
        let raw = self.client.generate(&prompt).await?;

        let questions: Vec<Question> = json_extractor::extract_items(&raw).map_err(|e| {
            log::warn!("Could not recover quiz JSON from model output: {}", e);
            e
        })?;

        if questions.len() != blueprint.question_count as usize {
            log::info!(
                "Model returned {} questions, {} were requested",
                questions.len(),
                blueprint.question_count
            );
        }

        Ok(questions)
    }
}
