use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use freqmine::{
    mine_itemsets, mine_sequences, CountStrategy, Corpus, LevelOneReport, MineConfig,
    MiningSummary, ResultWriter, TracingObserver,
};

#[derive(Parser)]
#[command(name = "freqmine")]
#[command(about = "Mine frequent itemsets and word sequences from transaction files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Frequent itemsets from `;`-delimited transactions
    Itemsets {
        #[command(flatten)]
        common: CommonArgs,

        /// Also write the level-1 survivors to this file
        #[arg(long)]
        level_one_output: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = StrategyArg::Rescan)]
        count_strategy: StrategyArg,
    },
    /// Frequent contiguous word sequences from space-separated transactions
    Sequences {
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(clap::Args)]
struct CommonArgs {
    /// Transaction file, one transaction per line
    #[arg(short, long)]
    input: PathBuf,

    /// Result file of `<count>:<pattern>` lines
    #[arg(short, long)]
    output: PathBuf,

    /// Minimum fraction of transactions a pattern must appear in
    #[arg(long, env = "FREQMINE_MIN_SUPPORT", default_value_t = 0.01)]
    min_support: f64,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Rescan,
    TidList,
}

impl From<StrategyArg> for CountStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Rescan => CountStrategy::Rescan,
            StrategyArg::TidList => CountStrategy::TidList,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt().init();
    }

    match run(cli.command) {
        Ok(summary) => {
            tracing::info!(patterns = summary.patterns, "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> anyhow::Result<MiningSummary> {
    match command {
        Command::Itemsets { common, level_one_output, count_strategy } => {
            let mut config = MineConfig::new(common.input, common.output)
                .with_min_support(common.min_support)
                .with_count_strategy(count_strategy.into());
            config.level_one_path = level_one_output;
            config.validate()?;

            // Load before creating any output file.
            let corpus = Corpus::load(&config.input_path)?;

            let summary = match &config.level_one_path {
                Some(path) => {
                    // The optional report goes first so a bad path leaves no main output.
                    let first = ResultWriter::create(path)?;
                    let mut report = LevelOneReport {
                        all: ResultWriter::create(&config.output_path)?,
                        first,
                    };
                    mine_itemsets(&corpus, &config, &mut report, &mut TracingObserver)?
                }
                None => {
                    let mut all = ResultWriter::create(&config.output_path)?;
                    mine_itemsets(&corpus, &config, &mut all, &mut TracingObserver)?
                }
            };
            Ok(summary)
        }
        Command::Sequences { common } => {
            let config = MineConfig::new(common.input, common.output)
                .with_min_support(common.min_support);
            config.validate()?;

            let corpus = Corpus::load(&config.input_path)?;
            let mut writer = ResultWriter::create(&config.output_path)?;
            Ok(mine_sequences(&corpus, &config, &mut writer, &mut TracingObserver)?)
        }
    }
}
