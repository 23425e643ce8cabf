use std::{fs, io, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use client_core::{load_settings, normalize_server_url, ReplyClient, ReplyGenerator};
use shared::{domain::Tone, protocol::GenerateReplyRequest};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Generate a reply to an email from the command line")]
struct Args {
    /// Base URL of the reply generation service.
    #[arg(long)]
    server_url: Option<String>,
    /// none, professional, casual or friendly.
    #[arg(long, default_value = "none")]
    tone: Tone,
    /// Read the email from this file instead of stdin.
    #[arg(long)]
    email_file: Option<PathBuf>,
}

fn read_email(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read email from '{}'", path.display())),
        None => io::read_to_string(io::stdin()).context("failed to read email from stdin"),
    }
}

/// Sends one request for `email_content`. Empty content is refused before
/// anything reaches the generator; every generation failure surfaces as the
/// fixed user-facing message.
async fn generate(
    generator: &dyn ReplyGenerator,
    email_content: String,
    tone: Tone,
) -> Result<String> {
    if email_content.is_empty() {
        bail!("email content must not be empty");
    }

    let request = GenerateReplyRequest::new(email_content, tone);
    match generator.generate_reply(&request).await {
        Ok(reply) => Ok(reply),
        Err(err) => {
            tracing::error!("generation failed: {err}");
            bail!("{}", err.user_message())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let raw_server_url = args
        .server_url
        .unwrap_or_else(|| load_settings().server_url);
    let server_url = normalize_server_url(&raw_server_url)
        .with_context(|| format!("unusable server url '{raw_server_url}'"))?;

    let email_content = read_email(args.email_file.as_ref())?;
    let client = ReplyClient::new(server_url);
    let reply = generate(&client, email_content, args.tone).await?;
    println!("{reply}");
    Ok(())
}
