use clap::{Parser, Subcommand};
use simple_press::client::ContentClient;
use simple_press::{client, config, fetch, generate, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "simple-press")]
#[command(about = "Static blog generator for headless-CMS content")]
#[command(long_about = "\
Static blog generator for headless-CMS content

A hosted content API is the data source. Posts are fetched by document
type, rendered into a listing page and one page per post, and additional
listing pages are hydrated in the browser through the API's pagination
cursor.

Routes:

  /                     Listing page, with in-browser load-more
  /post/<uid>/          One post: banner, date, author, reading time,
                        content sections
  /post/                Transitional shell for posts published after the
                        last build (hosts rewrite unknown /post/* here)
  /404.html             Explicit not-found page

Run 'simple-press gen-config' to generate a documented press.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Config file
    #[arg(long, default_value = "press.toml", global = true)]
    config: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".simple-press-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch content from the API into a manifest
    Fetch,
    /// Produce the final HTML site from a fetched manifest
    Generate,
    /// Run the full pipeline: fetch → generate
    Build,
    /// Validate config and probe the content API without building
    Check,
    /// Print a stock press.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Fetch => {
            let site_config = config::load(&cli.config)?;
            let api_client = client::content_client(&site_config.api);
            let manifest = fetch::fetch(&api_client, &site_config)?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_fetch_output(&manifest);
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            let (manifest, stats) = generate::generate_from_file(&manifest_path, &cli.output)?;
            output::print_generate_output(&manifest, &stats);
        }
        Command::Build => {
            let site_config = config::load(&cli.config)?;
            let api_client = client::content_client(&site_config.api);

            println!("==> Stage 1: Fetching from {}", site_config.api.url);
            let manifest = fetch::fetch(&api_client, &site_config)?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_fetch_output(&manifest);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let stats = generate::generate(&manifest, &cli.output)?;
            output::print_generate_output(&manifest, &stats);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            let site_config = config::load(&cli.config)?;
            println!("==> Config valid: {}", cli.config.display());
            let api_client = client::content_client(&site_config.api);
            let summaries = api_client.get_by_type(&site_config.api.content_type)?;
            println!(
                "==> API reachable: {} documents of type '{}'",
                summaries.len(),
                site_config.api.content_type
            );
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
