mod app;
mod cli;
mod speech;
mod status;

use std::sync::Arc;

use clap::Parser;

use dictation::VoiceInput;
use session::CalcSession;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    common::logger::init_logger("pricecalc-cli");

    let voice = if cli.no_voice {
        VoiceInput::unavailable(&cli.locale)
    } else {
        VoiceInput::new(Arc::new(speech::TypedSpeech), &cli.locale)
    };

    let session = CalcSession::new();

    app::run(session, voice).await
}
