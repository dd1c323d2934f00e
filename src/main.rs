use clap::{Parser as ClapParser, Subcommand};
use essql::cli::{self, BulkOptions, BulkOutcome, CliError, QueryOptions, QueryOutcome};
use essql::{Config, HttpSearchClient};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(ClapParser)]
#[command(name = "essql")]
#[command(about = "essql - SQL-like interpreter for elasticsearch queries")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// SELECT statement or bare WHERE clause (reads from stdin if not provided)
    query: Option<String>,

    /// Index to search when QUERY is a bare WHERE clause
    #[arg(short, long = "index")]
    indices: Vec<String>,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(clap::Args)]
struct CommonArgs {
    /// Print the generated elasticsearch REST API call
    #[arg(short, long, global = true)]
    print: bool,

    /// Do not execute the command
    #[arg(short, long, global = true)]
    norun: bool,

    /// Search service URL (overrides ESSQL_URL)
    #[arg(long, global = true)]
    url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Re-index the hits of a saved search response through _bulk
    Bulk {
        /// JSON file holding a search response
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(url) = cli.common.url.clone() {
        config.url = url;
    }

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    let result = match cli.command {
        Some(Commands::Bulk { file }) => run_bulk(&config, file, &cli.common),
        None => run_query(&config, cli.query, cli.indices, &cli.common),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_query(
    config: &Config,
    query: Option<String>,
    indices: Vec<String>,
    common: &CommonArgs,
) -> Result<(), CliError> {
    let query = match query {
        Some(q) => q,
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        None => return Err(CliError::NoInput),
    };

    let options = QueryOptions {
        query,
        indices,
        print: common.print,
        norun: common.norun,
    };

    let client = HttpSearchClient::new(&config.url, config.timeout())?;
    let mut stdout = io::stdout();

    match cli::execute_query(&options, &client, &mut stdout)? {
        QueryOutcome::Generated(request) if !options.print => println!("{}", request.body),
        QueryOutcome::Generated(_) => {}
        QueryOutcome::Executed(response) => println!("{}", response),
    }
    Ok(())
}

fn run_bulk(config: &Config, file: PathBuf, common: &CommonArgs) -> Result<(), CliError> {
    let options = BulkOptions {
        file,
        print: common.print,
        norun: common.norun,
    };

    let client = HttpSearchClient::new(&config.url, config.timeout())?;
    let mut stdout = io::stdout();

    match cli::execute_bulk(&options, &client, &mut stdout)? {
        BulkOutcome::Generated(body) if !options.print => print!("{}", body),
        BulkOutcome::Generated(_) => {}
        BulkOutcome::Executed(response) => println!("{}", response),
    }
    Ok(())
}
