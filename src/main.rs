use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use commit_evidence::collector::{format_date, DateRange};
use commit_evidence::config::{DEFAULT_CHANGELOG_URL, DEFAULT_OUTPUT_DIR};
use commit_evidence::{CommitCollector, CommitQuery, ReportWriter};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    version,
    about = "Collects one author's commits from a local repository checkout and writes an evidence-of-work report and a CSV commit calendar",
    long_about = None
)]
struct Cli {
    /// Username of the author whose commits are collected
    #[arg(short, long, value_parser = clap::builder::NonEmptyStringValueParser::new())]
    author: String,

    /// Local path to the checkout of the repository
    #[arg(short, long)]
    repo: PathBuf,

    /// Repository name used in the changelog viewer evidence URLs
    #[arg(short = 'n', long = "fisheye-repo-name")]
    fisheye_repo_name: String,

    /// Start date of commits to collect, format dd/mm/yyyy
    #[arg(short = 'f', long = "date-from", requires = "date_to")]
    date_from: Option<String>,

    /// End date of commits to collect, format dd/mm/yyyy
    #[arg(short = 't', long = "date-to", requires = "date_from")]
    date_to: Option<String>,

    /// Directory the reports are written to
    #[arg(short = 'o', long = "output-dir", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Base URL of the changelog viewer
    #[arg(long = "changelog-url", default_value = DEFAULT_CHANGELOG_URL)]
    changelog_url: String,
}

impl Cli {
    /// 必須引数の不足は終了コード2、それ以外の解析エラーは1で終了します
    fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                | ErrorKind::MissingRequiredArgument => err.exit(),
                _ => {
                    let _ = err.print();
                    std::process::exit(1);
                }
            },
        }
    }

    fn date_range(&self) -> anyhow::Result<Option<DateRange>> {
        match (&self.date_from, &self.date_to) {
            (Some(from), Some(to)) => Ok(Some(
                DateRange::parse(from, to).context("Failed to parse date range")?,
            )),
            _ => Ok(None),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_or_exit();
    let range = cli.date_range()?;

    let mut stdout = io::stdout();
    match &range {
        Some(range) => write!(
            stdout,
            "Collecting commits from {} to {}...",
            format_date(range.from),
            format_date(range.to)
        )?,
        None => write!(stdout, "Collecting commits...")?,
    }
    stdout.flush()?;

    let collector = CommitCollector::open(&cli.repo, cli.changelog_url.as_str())
        .context("Failed to open repository")?;

    let records = collector
        .collect(&CommitQuery {
            author: cli.author.clone(),
            display_repo_name: cli.fisheye_repo_name.clone(),
            range,
        })
        .context("Failed to collect commits")?;

    let repo = cli.repo.to_string_lossy();
    ReportWriter::new(&cli.output_dir)
        .write(&records, &cli.author, &repo)
        .context("Failed to write reports")?;

    writeln!(stdout, "done!")?;
    stdout.flush()?;

    Ok(())
}
