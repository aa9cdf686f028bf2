use clap::Parser;
use gemini_tools::config::Config;
use gemini_tools::gemini::{ConsultRequest, ConsultService, GeminiConsultClient};
use gemini_tools::input::{compose_question, load_image_attachments};
use gemini_tools::options::{MediaResolution, ThinkingLevel};
use gemini_tools::{mime, render};
use std::io;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "consult")]
#[command(about = "Ask a Gemini model a question, optionally with images and web search")]
struct CliArgs {
    /// The question to ask.
    question: String,

    /// Background context prepended to the question.
    #[arg(short, long)]
    context: Option<String>,

    /// Image file to attach; repeat for multiple images.
    #[arg(short = 'i', long = "image", value_name = "PATH")]
    images: Vec<PathBuf>,

    /// Resolution at which attached media is processed.
    #[arg(long, value_enum, default_value_t = MediaResolution::Medium)]
    media_resolution: MediaResolution,

    /// Disable web-search grounding.
    #[arg(long)]
    no_search: bool,

    /// Reasoning effort for the model.
    #[arg(long, value_enum, default_value_t = ThinkingLevel::High)]
    thinking: ThinkingLevel,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gemini_tools=info,consult=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = CliArgs::parse();

    match run(args).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Consultation failed: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(args: CliArgs) -> gemini_tools::Result<()> {
    let config = Config::from_env()?;
    let client = GeminiConsultClient::new(config.api_key, config.consult_model);

    let attachments = load_image_attachments(&args.images, mime::PHOTO_IMAGE_TYPES)?;
    for attachment in &attachments {
        info!(
            "Including image: {} ({})",
            attachment.path.display(),
            attachment.mime_type
        );
    }

    let question = compose_question(&args.question, args.context.as_deref());
    let search_grounding = !args.no_search;

    info!("Consulting {} (thinking: {})", client.model(), args.thinking);
    if search_grounding {
        info!("Web-search grounding enabled");
    }

    let request = ConsultRequest {
        attachments,
        question,
        thinking: args.thinking,
        media_resolution: args.media_resolution,
        search_grounding,
    };

    let consultation = client.consult(&request).await?;
    render::write_consultation(&mut io::stdout().lock(), &consultation)?;

    Ok(())
}
