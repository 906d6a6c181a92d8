use alchemia::prediction::{PromptBuilder, PromptTemplate};
use alchemia::session::{render_record, render_view, ResultView};
use alchemia::telemetry::init_tracing;
use alchemia::{
    GeminiLLMClient, LLMClient, PredictionClient, PredictionError, SessionController, Settings,
    SmilesInput,
};
use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "alchemia", version, about = "Molecular property prediction from SMILES", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(long, default_value = "info", global = true)]
    log_level: String,
    #[arg(long, global = true)]
    model: Option<String>,
    #[arg(long, global = true)]
    endpoint: Option<String>,
    #[arg(long, global = true)]
    temperature: Option<f32>,
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict properties for one SMILES string or file.
    Predict {
        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        smiles: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the prompt that would be sent, without calling the model.
    Prompt {
        #[arg(long)]
        smiles: String,
    },
    /// Interactive session.
    Shell,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn settings(
    cli: &Cli,
    load: impl FnOnce() -> anyhow::Result<Settings>,
) -> anyhow::Result<Settings> {
    let mut settings = load()?;
    if let Some(model) = &cli.model {
        settings = settings.with_model(model.clone());
    }
    if let Some(endpoint) = &cli.endpoint {
        settings = settings.with_endpoint(endpoint.clone());
    }
    if let Some(temperature) = cli.temperature {
        settings = settings.with_temperature(temperature)?;
    }
    if let Some(secs) = cli.timeout_secs {
        settings = settings.with_timeout(Duration::from_secs(secs.max(1)));
    }
    Ok(settings)
}

fn controller(settings: &Settings) -> Result<SessionController<GeminiLLMClient>, PredictionError> {
    let llm = GeminiLLMClient::new(settings).map_err(|err| {
        error!(error = %format!("{:#}", err), "model client unavailable");
        PredictionError::from_transport(&err)
    })?;
    let client = PredictionClient::new(Arc::new(llm), PromptTemplate::default())
        .with_temperature(settings.temperature);
    Ok(SessionController::new(client))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(cli, Settings::from_env) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, load: impl FnOnce() -> anyhow::Result<Settings>) -> anyhow::Result<ExitCode> {
    match &cli.command {
        Commands::Prompt { smiles } => {
            let smiles = SmilesInput::parse(smiles)?;
            println!("{}", PromptBuilder::new(PromptTemplate::default()).build(&smiles));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Predict {
            smiles,
            file,
            format,
        } => {
            let settings = settings(&cli, load)?;
            let mut session = match controller(&settings) {
                Ok(session) => session,
                Err(err) => {
                    eprintln!("Error: {}", err);
                    return Ok(ExitCode::FAILURE);
                }
            };
            match (smiles, file) {
                (Some(smiles), _) => session.set_text(smiles.clone()),
                (None, Some(file)) => session.load_file(file)?,
                (None, None) => bail!("either --smiles or --file is required"),
            }

            let stdout = io::stdout();
            match session.submit() {
                Ok(record) => {
                    let mut out = stdout.lock();
                    match *format {
                        OutputFormat::Text => render_record(record, &mut out)?,
                        OutputFormat::Json => {
                            writeln!(out, "{}", serde_json::to_string_pretty(record)?)?
                        }
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => {
                    eprintln!("Error: {}", err);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Shell => {
            let settings = settings(&cli, load)?;
            let mut session = match controller(&settings) {
                Ok(session) => session,
                Err(err) => {
                    eprintln!("Error: {}", err);
                    return Ok(ExitCode::FAILURE);
                }
            };
            shell(&mut session, io::stdin().lock(), &mut io::stdout())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

const SHELL_HELP: &str = "Type a SMILES string and press Enter to reveal its properties.
Commands: :load <path>  :show  :help  :quit
Examples: Aspirin CC(=O)OC1=CC=CC=C1C(=O)O, Caffeine CN1C=NC2=C1C(=O)N(C(=O)N2C)C";

fn shell<C: LLMClient>(
    session: &mut SessionController<C>,
    mut input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(out, "{}", SHELL_HELP)?;
    render_view(&ResultView::select(session.state()), out)?;

    loop {
        write!(out, "smiles> ")?;
        out.flush()?;
        let mut line = String::new();
        if input
            .read_line(&mut line)
            .context("failed to read from stdin")?
            == 0
        {
            break;
        }
        let line = line.trim();

        match line.split_once(char::is_whitespace).unwrap_or((line, "")) {
            (":quit", _) | (":q", _) => break,
            (":help", _) => writeln!(out, "{}", SHELL_HELP)?,
            (":show", _) => render_view(&ResultView::select(session.state()), out)?,
            (":load", path) => {
                if session.load_file(path.trim()).is_ok() {
                    writeln!(out, "Loaded: {}", session.state().text())?;
                } else if let Some(notice) = session.state().notice() {
                    writeln!(out, "{}", notice)?;
                }
            }
            (command, _) if command.starts_with(':') => {
                writeln!(out, "Unknown command: {}", command)?;
                writeln!(out, "{}", SHELL_HELP)?;
            }
            _ => {
                session.set_text(line);
                let mut write_result = Ok(());
                let outcome = session.submit_with(|state| {
                    if state.is_loading() && write_result.is_ok() {
                        write_result = render_view(&ResultView::select(state), &mut *out);
                    }
                });
                if let Err(err) = outcome {
                    debug!(error = %err, "prediction failed");
                }
                write_result?;
                render_view(&ResultView::select(session.state()), out)?;
            }
        }
    }
    Ok(())
}
