use clap::{Parser, Subcommand};
use growth_page::{config, content, generate, output};
use std::path::{Path, PathBuf};

/// Shared flags for commands that write the site.
#[derive(clap::Args, Clone)]
struct RebuildArgs {
    /// Ignore build.json and rewrite the page even if content is unchanged
    #[arg(long)]
    force: bool,
}

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "growth-page")]
#[command(about = "Static site generator for a single-page marketing site")]
#[command(long_about = "\
Static site generator for a single-page marketing site

One content file describes the brand, services, pricing and process. The
build renders a single self-contained index.html: inline styles, a small
inline script for the nav and reveal animations, and a native contact form
that posts to a third-party relay.

Content structure:

  content/
  ├── config.toml      # Site config: title, colors, nav, reveal, form relay (optional)
  ├── content.toml     # Brand, about, results, services, pricing, process (optional)
  └── assets/          # Static files (favicon, images) → copied to output root

Without content.toml the stock content is used.

Run 'growth-page gen-config' for a documented config.toml and
'growth-page gen-content' for the stock content.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".growth-page-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan content directory into a manifest
    Scan,
    /// Produce the final HTML page from the manifest
    Generate(RebuildArgs),
    /// Run the full pipeline: scan → generate
    Build(RebuildArgs),
    /// Validate content directory without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print the stock content.toml
    GenContent,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = content::scan(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);
        }
        Command::Generate(args) => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            let report =
                generate::generate(&manifest_path, &cli.source, &cli.output, args.force)?;
            output::print_generate_output(&report);
        }
        Command::Build(args) => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = content::scan(&cli.source)?;
            let manifest_path = write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let report =
                generate::generate(&manifest_path, &cli.source, &cli.output, args.force)?;
            output::print_generate_output(&report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = content::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenContent => {
            print!("{}", content::stock_content_toml());
        }
    }

    Ok(())
}

/// Write the scan manifest into the temp directory and return its path.
fn write_manifest(manifest: &content::Manifest, temp_dir: &Path) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(temp_dir)?;
    let manifest_path = temp_dir.join("manifest.json");
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(&manifest_path, json)?;
    Ok(manifest_path)
}
