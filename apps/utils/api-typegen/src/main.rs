use api_typegen::{Source, source};
use clap::Parser;
use color_eyre::Result;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate TypeScript API declarations from an OpenAPI document"
)]
struct Args {
    /// URL of the OpenAPI JSON document (defaults to $API_HOST:$API_PORT/api-json)
    #[arg(short, long, conflicts_with = "input")]
    url: Option<String>,

    /// Read the OpenAPI document from a file instead of a running server
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file for the generated declarations
    #[arg(short, long, default_value = "client.d.ts")]
    output: PathBuf,

    /// Write the declarations to stdout instead of a file
    #[arg(long)]
    stdout: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let input = match (args.input, args.url) {
        (Some(path), _) => Source::File(path),
        (None, Some(url)) => Source::Url(url),
        (None, None) => Source::Url(source::default_url()),
    };

    if args.verbose {
        eprintln!("Reading OpenAPI document from {}", input);
    }

    let document = input.load().await?;
    let declarations = api_typegen::generate(&document)?;

    if args.stdout {
        print!("{}", declarations);
        return Ok(());
    }

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&args.output, declarations)?;

    println!("Generated API types: {}", args.output.display());

    Ok(())
}
