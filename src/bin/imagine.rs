use clap::Parser;
use gemini_tools::config::Config;
use gemini_tools::gemini::{GeminiImageClient, ImageGenRequest, ImageGenService};
use gemini_tools::input::load_image_attachments;
use gemini_tools::options::{AspectRatio, ImageSize};
use gemini_tools::{mime, render, Error};
use std::io;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "imagine")]
#[command(about = "Generate an image with Gemini and save it to disk")]
struct CliArgs {
    /// Description of the image to generate.
    prompt: String,

    /// File path the generated image is written to.
    #[arg(short, long, value_name = "PATH")]
    output: PathBuf,

    /// Aspect ratio of the generated image.
    #[arg(long, value_enum, default_value_t = AspectRatio::R1x1)]
    aspect_ratio: AspectRatio,

    /// Output resolution tier.
    #[arg(long, value_enum, default_value_t = ImageSize::K1)]
    size: ImageSize,

    /// Reference image to guide generation; repeat for multiple images.
    #[arg(short = 'i', long = "image", value_name = "PATH")]
    images: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gemini_tools=info,imagine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = CliArgs::parse();

    match run(args).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Image generation failed: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(args: CliArgs) -> gemini_tools::Result<()> {
    let config = Config::from_env()?;
    let client = GeminiImageClient::new(config.api_key, config.image_model);

    let references = load_image_attachments(&args.images, mime::STANDARD_IMAGE_TYPES)?;
    for reference in &references {
        info!(
            "Including input image: {} ({})",
            reference.path.display(),
            reference.mime_type
        );
    }

    info!(
        "Generating image with {} ({}, {}): {}",
        client.model(),
        args.aspect_ratio,
        args.size,
        truncate_chars(&args.prompt, 100)
    );

    let request = ImageGenRequest {
        references,
        prompt: args.prompt,
        aspect_ratio: args.aspect_ratio,
        size: args.size,
    };

    let generation = client.generate(&request).await?;
    let saved = render::save_images(&generation, &args.output)?;

    for path in &saved {
        println!("Image saved to: {}", path.display());
    }
    if !generation.commentary.is_empty() {
        println!("Model response: {}", generation.commentary.join(" "));
    }

    if saved.is_empty() {
        return Err(Error::NoImage);
    }

    Ok(())
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
