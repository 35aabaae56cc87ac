use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    sync::Arc,
};

use clap::{Parser, Subcommand};

use study_companion::{
    client::StudyApiClient,
    errors::{AppError, AppResult},
    models::{
        domain::{quiz::DEFAULT_QUESTIONS, Question, QuizAttempt, QuizType},
        dto::request::GenerateQuizRequest,
    },
    repositories::{FileKeyValueStore, LocalQuizAttemptRepository, QuizAttemptRepository},
    services::{
        pdf_extractor,
        quiz_attempt_service::QuizAttemptService,
        quiz_session::{QuizSession, SessionPhase},
    },
};

#[derive(Parser)]
#[command(
    name = "study",
    version,
    about = "Quiz yourself, chat and find videos about a PDF"
)]
struct Cli {
    /// Base URL of the study companion backend
    #[arg(long, env = "STUDY_SERVER_URL", default_value = "http://localhost:8080")]
    server: String,

    /// Directory where quiz attempts are kept
    #[arg(long, env = "STUDY_DATA_DIR", default_value = ".study-companion")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and take a quiz on a PDF
    Quiz {
        /// Path to the PDF
        pdf: PathBuf,

        /// Question type: mcq, saq or laq
        #[arg(short = 't', long = "type", default_value = "mcq")]
        quiz_type: String,

        /// Number of questions (3-10)
        #[arg(short = 'n', long, default_value_t = DEFAULT_QUESTIONS)]
        count: u8,
    },
    /// Ask the study assistant a question
    Chat {
        message: String,

        /// PDF to use as context
        #[arg(long)]
        pdf: Option<PathBuf>,
    },
    /// Recommend videos related to a PDF
    Videos { pdf: PathBuf },
    /// Show aggregate quiz statistics
    Dashboard,
    /// List past quiz attempts
    History {
        /// Only attempts for this PDF file name
        #[arg(long)]
        pdf: Option<String>,
    },
    /// Delete all stored quiz attempts
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let api = StudyApiClient::new(&cli.server);
    let repository: Arc<dyn QuizAttemptRepository> = Arc::new(LocalQuizAttemptRepository::new(
        FileKeyValueStore::new(&cli.data_dir),
    ));

    let result = match cli.command {
        Commands::Quiz {
            pdf,
            quiz_type,
            count,
        } => run_quiz(&api, repository, &pdf, &quiz_type, count).await,
        Commands::Chat { message, pdf } => run_chat(&api, &message, pdf.as_deref()).await,
        Commands::Videos { pdf } => run_videos(&api, &pdf).await,
        Commands::Dashboard => {
            print_dashboard(&repository.list_all());
            Ok(())
        }
        Commands::History { pdf } => {
            let attempts = match pdf {
                Some(name) => repository.list_by_pdf(&name),
                None => repository.list_all(),
            };
            print_history(&attempts);
            Ok(())
        }
        Commands::Clear { yes } => run_clear(repository.as_ref(), yes),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

async fn run_quiz(
    api: &StudyApiClient,
    repository: Arc<dyn QuizAttemptRepository>,
    pdf: &Path,
    quiz_type: &str,
    count: u8,
) -> AppResult<()> {
    let quiz_type: QuizType = quiz_type.parse()?;
    let text = pdf_extractor::extract_text_from_file(pdf)?;

    println!("Generating {} {} questions...", count, quiz_type);
    let questions = api
        .generate_quiz(&GenerateQuizRequest::new(text, quiz_type, count))
        .await?;

    let mut session = QuizSession::new(file_name(pdf), quiz_type, questions, repository)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    while let Some(index) = session.current_index() {
        if let SessionPhase::Answering(_) = session.phase() {
            let question = session.questions()[index].clone();
            print_question(index, session.questions().len(), &question);
            let answer = read_answer(&mut input, quiz_type, &question)?;
            session.answer(answer)?;

            let feedback = session.submit()?;
            match feedback.correct {
                Some(true) => println!("Correct!"),
                Some(false) => println!("Incorrect. Answer: {}", feedback.correct_answer),
                None => println!("Model answer: {}", feedback.correct_answer),
            }
            if !feedback.explanation.is_empty() {
                println!("{}", feedback.explanation);
            }
            println!();
        }
        session.next()?;
    }

    if let Some(result) = session.result() {
        println!("Finished {} quiz on {}", quiz_type, session.pdf_name());
        if quiz_type.is_auto_scored() {
            println!(
                "Score: {}/{} ({}%)",
                result.correct_answers, result.total_questions, result.score
            );
        } else {
            println!("Quiz complete. Compare your answers with the model answers above.");
        }
        if result.saved_attempt.is_none() {
            println!("(attempt could not be saved)");
        }
    }
    Ok(())
}

fn print_question(index: usize, total: usize, question: &Question) {
    println!("Question {} of {}", index + 1, total);
    println!("{}", question.question);
    if let Some(options) = &question.options {
        for (i, option) in options.iter().enumerate() {
            println!("  {}. {}", i + 1, option);
        }
    }
}

fn read_answer(input: &mut impl BufRead, quiz_type: QuizType, question: &Question) -> AppResult<String> {
    match (quiz_type, &question.options) {
        (QuizType::Mcq, Some(options)) => loop {
            print!("Your choice: ");
            io::stdout().flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Err(AppError::ValidationError("input closed".to_string()));
            }
            match resolve_choice(line.trim(), options) {
                Some(choice) => return Ok(choice),
                None => println!("Enter an option letter or number."),
            }
        },
        _ => {
            println!("Your answer (finish with an empty line):");
            let mut lines = Vec::new();
            for line in input.lines() {
                let line = line?;
                if line.trim().is_empty() {
                    break;
                }
                lines.push(line);
            }
            Ok(lines.join("\n"))
        }
    }
}

/// Maps `b`, `B`, `2` or the option text itself to the option text.
fn resolve_choice(input: &str, options: &[String]) -> Option<String> {
    if input.is_empty() {
        return None;
    }
    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| options.get(i)).cloned();
    }

    let mut chars = input.chars();
    if let (Some(letter), None) = (chars.next(), chars.next()) {
        if letter.is_ascii_alphabetic() {
            let index = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
            return options.get(index).cloned();
        }
    }

    options
        .iter()
        .find(|option| QuizAttemptService::answers_match(input, option))
        .cloned()
}

async fn run_chat(api: &StudyApiClient, message: &str, pdf: Option<&Path>) -> AppResult<()> {
    let context = pdf.map(pdf_extractor::extract_text_from_file).transpose()?;
    let reply = api.chat(message, context).await?;
    println!("{}", reply);
    Ok(())
}

async fn run_videos(api: &StudyApiClient, pdf: &Path) -> AppResult<()> {
    let text = pdf_extractor::extract_text_from_file(pdf)?;
    let videos = api.video_recommendations(&text).await?;

    if videos.is_empty() {
        println!("No videos found.");
    }
    for video in videos {
        println!("{}", video.title);
        if !video.channel_title.is_empty() {
            println!("  {}", video.channel_title);
        }
        if !video.description.is_empty() {
            println!("  {}", video.description);
        }
        println!("  {}", video.url);
    }
    Ok(())
}

fn print_dashboard(attempts: &[QuizAttempt]) {
    let stats = QuizAttemptService::compute_stats(attempts);

    println!("Quizzes taken:     {}", stats.total_attempts);
    println!("Average score:     {}%", stats.average_score);
    println!(
        "Correct answers:   {}/{}",
        stats.total_correct, stats.total_questions
    );
    for quiz_type in QuizType::ALL {
        println!("{:<18} {}", format!("{} quizzes:", quiz_type), stats.by_type.get(quiz_type));
    }
}

fn print_history(attempts: &[QuizAttempt]) {
    if attempts.is_empty() {
        println!("No quiz attempts yet.");
        return;
    }

    let mut attempts = attempts.to_vec();
    attempts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    for attempt in attempts {
        let when = chrono::DateTime::from_timestamp_millis(attempt.timestamp)
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!(
            "{}  {:<4} {:>3}%  {}/{}  {}",
            when,
            attempt.quiz_type.as_str(),
            attempt.score,
            attempt.correct_answers,
            attempt.total_questions,
            attempt.pdf_name
        );
    }
}

fn run_clear(repository: &dyn QuizAttemptRepository, yes: bool) -> AppResult<()> {
    if !yes {
        print!("Delete all quiz attempts? [y/N] ");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        if !line.trim().eq_ignore_ascii_case("y") {
            println!("Nothing deleted.");
            return Ok(());
        }
    }
    repository.clear_all();
    println!("Quiz history cleared.");
    Ok(())
}
