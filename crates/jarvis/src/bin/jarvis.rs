//! Runs commands through the assistant pipeline from the terminal.
//!
//! Usage: `jarvis turn on the flashlight`, or pipe one command per line on
//! stdin.

use std::sync::Arc;

use jarvis::capability::CapabilityRegistry;
use jarvis::classifier::{
    GeminiTransport, IntentClassifier, KeywordClassifier, PromptTemplate, RemoteClassifier,
};
use jarvis::platform::default_platform;
use jarvis::{
    AssistantSettings, Dispatcher, ExecutionOutcome, JarvisError, JarvisResult, Orchestrator,
};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    env_logger::init();

    if let Err(error) = run().await {
        eprintln!("jarvis: {error}");
        std::process::exit(1);
    }
}

async fn run() -> JarvisResult<()> {
    let settings = AssistantSettings::from_env()?;
    let classifier = build_classifier(&settings)?;
    let registry = CapabilityRegistry::with_defaults(default_platform());
    let orchestrator = Orchestrator::new(classifier, Dispatcher::new(Arc::new(registry)))
        .with_max_concurrent(settings.max_concurrent_submissions);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        let outcome = orchestrator.submit(args.join(" ")).outcome().await;
        report(&outcome);
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending = Vec::new();
    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|error| JarvisError::Internal(format!("failed to read stdin: {error}")))?
    {
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        pending.push(orchestrator.submit(command));
    }
    for submission in pending {
        report(&submission.outcome().await);
    }
    Ok(())
}

fn build_classifier(settings: &AssistantSettings) -> JarvisResult<Arc<dyn IntentClassifier>> {
    if !settings.gemini.has_credentials() {
        tracing::warn!("no Gemini API key configured, using keyword classification only");
        return Ok(Arc::new(KeywordClassifier));
    }

    let prompt = match &settings.prompt_path {
        Some(path) => PromptTemplate::load(path)?,
        None => PromptTemplate::default(),
    };
    let transport = Arc::new(GeminiTransport::new(&settings.gemini)?);
    Ok(Arc::new(
        RemoteClassifier::new(transport, &settings.gemini)
            .with_prompt(prompt)
            .with_timeout(settings.classify_timeout),
    ))
}

fn report(outcome: &ExecutionOutcome) {
    let status = if outcome.requires_user_action {
        "action-needed"
    } else if outcome.succeeded {
        "ok"
    } else {
        "fail"
    };
    println!("{status}: {}", outcome.message);
}
