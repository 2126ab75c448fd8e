use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// nylas - call the Nylas REST API from the command line
///
/// Requests are authenticated with the access token from --token or the
/// NYLAS_ACCESS_TOKEN environment variable; without one they are sent
/// anonymously.
///
/// Examples:
///   nylas get account                  # Show the account behind the token
///   nylas get messages -q limit=5      # List the five latest messages
///   nylas download files/ID/download -o report.pdf
#[derive(Parser, Debug)]
#[command(author, version = nylas::interceptor::SDK_VERSION, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API base URL (defaults to https://api.nylas.com)
    #[arg(long = "api-url", env = "NYLAS_API_URL", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Access token used as the HTTP Basic username
    #[arg(
        long = "token",
        env = "NYLAS_ACCESS_TOKEN",
        value_name = "TOKEN",
        hide_env_values = true,
        global = true
    )]
    pub token: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// GET a resource and print the response
    Get(GetArgs),

    /// Download a resource body into a file
    Download(DownloadArgs),
}

#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Resource path relative to the API URL, e.g. "account"
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Query parameter in the form key=value (repeatable)
    #[arg(long = "query", short = 'q', value_name = "KEY=VALUE", value_parser = parse_query)]
    pub query: Vec<(String, String)>,

    /// Print the body as received instead of pretty-printed JSON
    #[arg(long)]
    pub raw: bool,
}

#[derive(clap::Args, Debug)]
pub struct DownloadArgs {
    /// Resource path relative to the API URL
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Destination file
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: PathBuf,
}

fn parse_query(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    if key.is_empty() {
        return Err(format!("empty key in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let client = nylas::commands::client(cli.api_url)?;
    let token = cli.token.as_deref();

    match cli.command {
        Commands::Get(args) => {
            let mut stdout = std::io::stdout().lock();
            nylas::commands::get(&client, token, &args.path, &args.query, args.raw, &mut stdout)
                .await?
        }
        Commands::Download(args) => {
            let bytes = nylas::commands::download(&client, token, &args.path, &args.output).await?;
            println!("Saved {} bytes to {}", bytes, args.output.display());
        }
    }
    Ok(())
}
