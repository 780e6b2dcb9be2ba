mod form;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{Environment, FromEnv};
use translator_client::{ClientConfig, TranslatorClient};

#[derive(Parser, Debug)]
#[command(author, version, about = "Command-line client for the Turbo Translator API")]
struct Args {
    /// API base URL (overrides TRANSLATOR_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List supported languages
    Languages,

    /// Translate text
    Translate {
        /// Source language code (defaults to the first supported language)
        #[arg(short, long)]
        from: Option<String>,

        /// Target language code (defaults to the second supported language)
        #[arg(short, long)]
        to: Option<String>,

        /// Text to translate
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let args = Args::parse();
    if args.verbose {
        init_tracing(&Environment::from_env());
    }

    let mut config = ClientConfig::from_env()?;
    if let Some(url) = args.api_url {
        config.base_url = url;
    }
    let client = TranslatorClient::new(&config)?;
    tracing::debug!(base_url = %client.base_url(), "Using translator API");

    match args.command {
        Command::Languages => {
            for language in client.languages().await?.languages {
                println!("{:<4}{}", language.code, language.name);
            }
        }
        Command::Translate { from, to, text } => {
            let text = text.join(" ");

            let request = form::prepare_request(&text, from, to, || async {
                Ok::<_, color_eyre::Report>(client.languages().await?.languages)
            })
            .await?;
            let response = client.translate(&request).await?;

            println!("{}", response.translated_text);
            println!("Confidence: {}", form::format_confidence(&response));
        }
    }

    Ok(())
}
