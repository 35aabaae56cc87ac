pub const QUIZ_PREAMBLE: &str =
    "You are a helpful tutor creating quiz questions from educational content.";

pub const MCQ_INSTRUCTIONS: &str = "For MCQ (Multiple Choice Questions):
- Provide 4 options (A, B, C, D)
- Mark the correct answer
- Set correctAnswer to the correct option exactly as it is written in options
- Provide a brief explanation";

pub const SAQ_INSTRUCTIONS: &str = "For SAQ (Short Answer Questions):
- Questions should require 2-3 sentence answers
- Provide model answer
- Provide evaluation criteria";

pub const LAQ_INSTRUCTIONS: &str = "For LAQ (Long Answer Questions):
- Questions should require detailed paragraph answers
- Provide comprehensive model answer
- Provide key points for evaluation";

pub const SCHEMA_INTRO: &str = "Return the response as a JSON array with this exact structure:";

pub const SCHEMA_OPTIONS_LINE: &str =
    r#""options": ["A) option1", "B) option2", "C) option3", "D) option4"],"#;

pub const JSON_ONLY_DIRECTIVE: &str =
    "IMPORTANT: Return ONLY the JSON array, no additional text.";
