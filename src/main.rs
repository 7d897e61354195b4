use clap::Parser;
use colored::Colorize;
use econ_agent::domain::ports::Pipeline;
use econ_agent::utils::{logger, validation::Validate};
use econ_agent::{AgentEngine, AgentPipeline, CliConfig, Credentials, FredClient, GeminiClient};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting econ-agent");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            tracing::error!("❌ Startup failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let llm = GeminiClient::new(
        &config.llm_endpoint,
        &config.model,
        &credentials.google_api_key,
    )?;
    let source = FredClient::new(
        &config.data_endpoint,
        &credentials.fred_api_key,
        config.lookback_days,
    )?;
    let engine = AgentEngine::new(AgentPipeline::new(llm, source));

    run_repl(&engine).await
}

async fn run_repl<P: Pipeline>(engine: &AgentEngine<P>) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!(
        "{}",
        "Ask an economic question (type 'exit' to quit)".cyan()
    );

    loop {
        match rl.readline(">>> ") {
            Ok(line) => {
                let question = line.trim();
                if question.is_empty() {
                    continue;
                }
                if question.eq_ignore_ascii_case("exit") || question.eq_ignore_ascii_case("quit") {
                    break;
                }

                let _ = rl.add_history_entry(question);

                match engine.answer(question).await {
                    Ok(answer) => {
                        println!("\n{}", "=== ANSWER ===".green().bold());
                        println!("{}\n", answer);
                    }
                    Err(e) => {
                        tracing::error!("Pipeline run failed: {}", e);
                        eprintln!("❌ {}", e.user_friendly_message());
                        eprintln!("💡 {}\n", e.recovery_suggestion());
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("❌ Input error: {}", e);
                break;
            }
        }
    }

    println!("Bye!");
    Ok(())
}
