use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use primer_common::{PrimerConfig, PrimerError, Topic, Transcript};
use primer_snippets::{Catalog, Context, FixedClock};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "primer")]
#[command(author, version, about = "Runnable snippets, one language construct each")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every topic in lesson order
    List,

    /// Describe what a topic demonstrates
    Show {
        /// Topic slug, number or NN_slug
        topic: Topic,
    },

    /// Run snippets and print their transcripts
    Run {
        /// Topics to run (default: the configured ones, or all)
        topics: Vec<Topic>,

        /// Run every topic, ignoring the selection
        #[arg(long, conflicts_with = "topics")]
        all: bool,

        /// Session configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pin the weekday seen by time-dependent snippets (e.g. sat)
        #[arg(long)]
        weekday: Option<chrono::Weekday>,

        /// Omit the banner above each transcript
        #[arg(long)]
        no_banner: bool,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            for topic in Topic::ALL {
                println!("{:02} {:<12} {}", topic.number(), topic.slug(), topic.summary());
            }
        }

        Commands::Show { topic } => {
            println!("{}: {}", topic.label(), topic.summary());
        }

        Commands::Run {
            topics,
            all,
            config,
            weekday,
            no_banner,
        } => {
            let config = match config {
                Some(path) => PrimerConfig::from_file(&path)?,
                None => PrimerConfig::default(),
            };

            let ctx = match weekday {
                Some(day) => Context::new(FixedClock::on_weekday(day)),
                None => Context::from_config(&config)?,
            };

            let selected = if all {
                Topic::ALL.to_vec()
            } else if topics.is_empty() {
                config.topics()?
            } else {
                topics
            };
            let banner = config.session.banner && !no_banner;

            info!(topics = selected.len(), "starting session");
            let runs = Catalog::new().run_selected(&selected, &ctx)?;

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for (i, (topic, transcript)) in runs.iter().enumerate() {
                if i > 0 {
                    writeln!(out).into_diagnostic()?;
                }
                print_transcript(&mut out, *topic, transcript, banner)?;
            }
        }
    }

    Ok(())
}

/// Directives from `RUST_LOG`, falling back to `warn` when unset or unparsable.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn print_transcript(
    out: &mut impl Write,
    topic: Topic,
    transcript: &Transcript,
    banner: bool,
) -> Result<(), PrimerError> {
    if banner {
        writeln!(out, "== {:02} {} ==", topic.number(), topic.slug()).map_err(PrimerError::Output)?;
    }
    transcript.write_to(&mut *out).map_err(PrimerError::Output)?;
    if transcript.is_open() {
        writeln!(out).map_err(PrimerError::Output)?;
    }
    Ok(())
}
