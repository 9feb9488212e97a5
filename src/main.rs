//! Picgen - prompt-to-image generation via Gemini, as a CLI and a web UI.

mod adapters;
mod cassette;
mod cli;
mod config;
mod context;
mod error;
mod generate;
mod output;
mod ports;
mod server;

use std::path::Path;
use std::process;
use std::sync::Arc;

use clap::Parser;

use crate::adapters::live::gemini::GeminiGenerator;
use crate::cli::{Cli, Command, GenerateArgs, ServeArgs};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::generate::generate_to_file;
use crate::output::resolve_output_path;
use crate::ports::ImageGenerator;
use crate::server::{serve, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "picgen=info,tower_http=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate(args) => run_generate(args).await,
        Command::Serve(args) => run_serve(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run_generate(args: GenerateArgs) -> Result<(), error::GenError> {
    let config_path = config::discover_config_path(args.config.as_deref());
    let config = Config::load(&config_path).map_err(error::GenError::Config)?;

    let prompt = args.resolve_prompt()?;
    if args.verbose {
        eprintln!("Prompt: {prompt}");
    }

    // Select live / recording / replaying mode (replay wins when both are set).
    let replay_path = std::env::var("PICGEN_REPLAY").ok();
    let is_recording = std::env::var("PICGEN_REC").is_ok_and(|v| v == "true" || v == "1");

    let (ctx, recording_session) = if let Some(ref cassette_path) = replay_path {
        if args.verbose {
            eprintln!("Replaying from: {cassette_path}");
        }
        (ServiceContext::replaying(Path::new(cassette_path))?, None)
    } else if is_recording {
        if args.verbose {
            eprintln!("Recording mode enabled");
        }
        let (ctx, session) = ServiceContext::recording(&config, args.model.as_deref())?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(&config, args.model.as_deref())?, None)
    };

    let output_path = resolve_output_path(args.output.as_deref());
    let written = generate_to_file(ctx.generator.as_ref(), &prompt, &output_path).await?;
    eprintln!("Image saved as {}", written.display());

    if let Some(session) = recording_session {
        match session.finish() {
            Ok(path) => eprintln!("Cassette saved: {}", path.display()),
            Err(e) => eprintln!("Warning: failed to save cassette: {e}"),
        }
    }

    Ok(())
}

async fn run_serve(args: ServeArgs) -> Result<(), error::GenError> {
    let config_path = config::discover_config_path(args.config.as_deref());
    let config = Config::load(&config_path).map_err(error::GenError::Config)?;

    // The credential is resolved once here; request handlers never read the
    // environment. A server without a key still binds and answers the API
    // route with its error envelope.
    let generator: Option<Arc<dyn ImageGenerator>> = match config.gemini_key() {
        Some(key) if !key.is_empty() => Some(Arc::new(GeminiGenerator::new(key)?)),
        _ => {
            tracing::warn!("No Gemini API key configured; /api/generate will report it");
            None
        }
    };

    serve(AppState { generator }, args.port).await
}
