use std::path::PathBuf;

use clap::Parser;

use og_image::CardConfig;

/// Render the CBRN Open Graph preview image
#[derive(Parser, Debug)]
#[command(name = "og-image", version, about)]
struct Cli {
    /// Destination PNG (parent directory must exist)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Preferred font file; the built-in bitmap font is used if it cannot be loaded
    #[arg(long)]
    font: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> CardConfig {
        let defaults = CardConfig::default();
        CardConfig {
            output: self.output.unwrap_or(defaults.output),
            font_path: self.font.unwrap_or(defaults.font_path),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Cli::parse().into_config();
    og_image::render_to_file(&config)?;

    println!("✅ OG image created: {}", config.output.display());
    Ok(())
}
