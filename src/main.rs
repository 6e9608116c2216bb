use anyhow::Context;
use clap::{Parser, Subcommand};
use edgecopy::app::{handle_fatal_error, init_logging, AppConfig};
use edgecopy::config::{ConfigLoader, JobConfig};
use edgecopy::io::{read_vertices_from_path, write_vertices_to_path};
use edgecopy::metrics::TracingObserver;
use edgecopy::runtime::LocalJob;
use edgecopy::transform::DirectionOption;
use std::path::PathBuf;
use std::sync::Arc;

/// Copy graph edges onto the vertices they point at
#[derive(Parser)]
#[command(name = "edgecopy", version)]
#[command(about = "Make directed edges visible from both endpoints", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the edge copy job over a JSON-lines vertex file
    Run {
        /// Input file, one vertex per line
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the merged vertices
        #[arg(short, long)]
        output: PathBuf,

        /// Path to a TOML configuration file
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Direction of edges to copy (out, in)
        #[arg(short, long)]
        direction: Option<DirectionOption>,

        /// Number of map tasks
        #[arg(long)]
        map_tasks: Option<usize>,

        /// Number of reduce tasks
        #[arg(long)]
        reduce_tasks: Option<usize>,

        /// Write the final counter totals as JSON to this file
        #[arg(long)]
        counters: Option<PathBuf>,
    },
    /// Check a configuration without running a job
    Validate {
        /// Path to a TOML configuration file
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Direction of edges to copy (out, in)
        #[arg(short, long)]
        direction: Option<DirectionOption>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let app_config = AppConfig::new(cli.verbose);
    init_logging(&app_config);

    let result = match cli.command {
        Commands::Run {
            input,
            output,
            config,
            direction,
            map_tasks,
            reduce_tasks,
            counters,
        } => {
            run_job(RunArgs {
                input,
                output,
                config,
                direction,
                map_tasks,
                reduce_tasks,
                counters,
            })
            .await
        }
        Commands::Validate { config, direction } => run_validate(config, direction).await,
    };

    if let Err(e) = result {
        handle_fatal_error(e, cli.verbose);
    }
}

struct RunArgs {
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
    direction: Option<DirectionOption>,
    map_tasks: Option<usize>,
    reduce_tasks: Option<usize>,
    counters: Option<PathBuf>,
}

async fn load_settings(
    config: Option<PathBuf>,
    direction: Option<DirectionOption>,
) -> anyhow::Result<JobConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config {
        loader = loader.with_file(path);
    }
    let mut settings = loader.load().await?;
    if let Some(direction) = direction {
        settings.edge_copy.direction = direction;
    }
    Ok(settings)
}

async fn run_job(args: RunArgs) -> anyhow::Result<()> {
    let mut settings = load_settings(args.config, args.direction).await?;
    if let Some(tasks) = args.map_tasks {
        settings.job.map_tasks = tasks;
    }
    if let Some(tasks) = args.reduce_tasks {
        settings.job.reduce_tasks = tasks;
    }

    let job = LocalJob::from_config(&settings)?.with_observer(Arc::new(TracingObserver));

    let vertices = read_vertices_from_path(&args.input)?;
    let report = job.run(vertices).await?;
    write_vertices_to_path(&args.output, &report.vertices)?;

    if let Some(path) = args.counters {
        let json = serde_json::to_string_pretty(&report.counters)?;
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("failed to write counters to {}", path.display()))?;
    }

    println!(
        "Copied {} {} edges: {} input vertices, {} output vertices, {} edges added ({:.2?})",
        report.counters.edges_copied,
        job.config().direction(),
        report.input_vertices,
        report.vertices.len(),
        report.counters.edges_added,
        report.duration,
    );
    Ok(())
}

async fn run_validate(
    config: Option<PathBuf>,
    direction: Option<DirectionOption>,
) -> anyhow::Result<()> {
    let settings = load_settings(config, direction).await?;
    settings.validate()?;
    println!(
        "Configuration is valid: direction={}, map_tasks={}, reduce_tasks={}",
        settings.edge_copy.direction, settings.job.map_tasks, settings.job.reduce_tasks
    );
    Ok(())
}
