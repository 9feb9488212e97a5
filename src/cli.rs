//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};

/// Prompt used when no prompt argument is given.
pub const SAMPLE_PROMPT: &str =
    "A watercolor painting of a lighthouse on a rocky coast at dawn";

/// Prompt-to-image generation via Gemini.
#[derive(Parser, Debug)]
#[command(name = "picgen", version, about)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate an image and write it to a file.
    Generate(GenerateArgs),
    /// Serve the web UI and the generation API over HTTP.
    Serve(ServeArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Text prompt describing the desired image (a sample prompt is used
    /// when omitted).
    #[arg(conflicts_with = "prompt_file")]
    pub prompt: Option<String>,

    /// Path to a file containing the prompt text.
    #[arg(short = 'p', long, conflicts_with = "prompt")]
    pub prompt_file: Option<String>,

    /// Model identifier override.
    #[arg(short, long)]
    pub model: Option<String>,

    /// Output file path (defaults to output-image.png).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments for the `serve` subcommand.
#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on.
    #[arg(long, default_value = "3000")]
    pub port: u16,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,
}

impl GenerateArgs {
    /// Resolve the prompt from the positional argument, the file flag, or
    /// the built-in sample prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt file cannot be read.
    pub fn resolve_prompt(&self) -> Result<String, std::io::Error> {
        if let Some(ref text) = self.prompt {
            Ok(text.clone())
        } else if let Some(ref path) = self.prompt_file {
            std::fs::read_to_string(path)
        } else {
            Ok(SAMPLE_PROMPT.to_string())
        }
    }
}
