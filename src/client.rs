use anyhow::Result;
use caesar_decoder::constants::{DEFAULT_URL, MAX_SHIFT, MIN_SHIFT};
use caesar_decoder::protocol::{Request, Response};
use caesar_decoder::render::render;
use caesar_decoder::service::{self, check_text};
use caesar_decoder::socket;
use caesar_decoder::structs::Caesar;
use caesar_decoder::traits::Encryptor;
use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};
use rand::Rng;
use std::io::Read;

#[derive(Parser, Debug)]
#[clap(name = "client", version, about = "Decode Caesar cipher text")]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    #[clap(long, env = "CAESAR_URL", default_value = DEFAULT_URL)]
    url: String,

    #[clap(long, help = "Decode in-process instead of asking the server")]
    local: bool,

    #[clap(long, short, env = "CAESAR_LOG", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode with a known shift
    Shift {
        #[clap(value_parser = clap::value_parser!(i32).range(1..=25))]
        shift: i32,
        /// Text to decode; read from stdin when omitted
        text: Option<String>,
    },
    /// Try all 25 shifts and rank the results
    Brute { text: Option<String> },
    /// Show the built-in example
    Example,
    /// Encode text locally, picking a random shift unless one is given
    Encode {
        #[clap(long, short, value_parser = clap::value_parser!(i32).range(1..=25))]
        shift: Option<i32>,
        text: Option<String>,
    },
}

fn read_text(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf.trim_end_matches(['\n', '\r']).to_string())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(LevelFilter::Warn))
        .init();

    let request = match cli.command {
        Command::Shift { shift, text } => Request::KnownShift {
            text: read_text(text)?,
            shift,
        },
        Command::Brute { text } => Request::BruteForce {
            text: read_text(text)?,
        },
        Command::Example => Request::Example,
        Command::Encode { shift, text } => {
            let text = read_text(text)?;
            check_text(&text)?;
            let shift =
                shift.unwrap_or_else(|| rand::thread_rng().gen_range(MIN_SHIFT..=MAX_SHIFT));
            println!("Encoded with shift {}:", shift);
            println!("{}", Caesar::new(shift).encrypt(&text));
            return Ok(());
        }
    };

    let response = if cli.local {
        service::handle(request)
    } else {
        debug!("Sending request to {}", cli.url);
        socket::request(&cli.url, &request).await?
    };

    if let Response::Error { .. } = response {
        eprint!("{}", render(&response));
        std::process::exit(1);
    }

    print!("{}", render(&response));

    Ok(())
}
