pub const STUDY_ASSISTANT_PREAMBLE: &str = "You are a helpful study assistant.";

pub const CHAT_WITH_CONTEXT_INSTRUCTIONS: &str = "Provide a clear, concise, and helpful answer. If the question relates to the PDF content, reference specific parts when relevant.";

pub const CHAT_WITHOUT_CONTEXT_INSTRUCTIONS: &str =
    "Answer the following question clearly and concisely:";

pub const VIDEO_RECOMMENDATION_COUNT: usize = 6;

pub const VIDEO_FIELD_INSTRUCTIONS: &str = "For each video recommendation, provide:
1. A specific video title that is likely to exist on YouTube
2. A brief description of what the video should cover
3. A search query to find the video
4. A likely channel name that would have this content";

pub const VIDEO_SCHEMA: &str = r#"Return the response as a JSON array with this exact structure:
[
  {
    "title": "video title",
    "description": "what this video covers",
    "searchQuery": "exact search terms for YouTube",
    "channel": "channel name"
  }
]"#;

pub const VIDEO_JSON_ONLY_DIRECTIVE: &str =
    "IMPORTANT: Return ONLY the JSON array, no additional text or markdown.";
