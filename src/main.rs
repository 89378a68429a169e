//! Linkmee CLI
//!
//! - `serve`: run the host
//! - `links`: print the link list
//! - `render`: write the static page
//! - `config`: write the default config file

use anyhow::Context;
use chrono::Datelike;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use linkmee::config::{generate_default_config, Config};
use linkmee::content::{LinkEntry, SITE};
use linkmee::logging::init_logging;
use linkmee::server::routes::pages::static_page;
use linkmee::server::{serve, AppState};
use linkmee::ThemeMode;

#[derive(Parser)]
#[command(name = "linkmee")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Personal link-in-bio page")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the page
    Serve {
        /// Override the configured host
        #[arg(long)]
        host: Option<String>,
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List the links
    Links {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Render the static page
    Render {
        /// dark or light
        #[arg(short, long, default_value = "dark")]
        theme: ThemeMode,
        /// Copyright year (default: current year)
        #[arg(short, long)]
        year: Option<i32>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Print the effective configuration instead of the template
        #[arg(long)]
        effective: bool,
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };

    match cli.command {
        Commands::Serve { host, port } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            init_logging(&config.logging).context("installing the log subscriber")?;
            tracing::info!("Linkmee v{}", env!("CARGO_PKG_VERSION"));

            serve(AppState::new(&config), &config.server).await?;
        }

        Commands::Links { format } => match format {
            OutputFormat::Table => print!("{}", links_table(SITE.links)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(SITE.links)?),
        },

        Commands::Render {
            theme,
            year,
            output,
        } => {
            let year = year.unwrap_or_else(|| chrono::Local::now().year());
            let html = static_page(&SITE, theme, year)?;
            write_output(output.as_deref(), &html)?;
        }

        Commands::Config { effective, output } => {
            let text = if effective {
                toml::to_string_pretty(&config)?
            } else {
                generate_default_config()
            };
            write_output(output.as_deref(), &text)?;
        }
    }

    Ok(())
}

fn links_table(links: &[LinkEntry]) -> String {
    let title_width = links.iter().map(|l| l.title.len()).max().unwrap_or(0).max(5);

    let mut out = format!("{:<3} {:<width$} URL\n", "#", "TITLE", width = title_width);
    out.push_str(&format!("{}\n", "-".repeat(60)));
    for (i, link) in links.iter().enumerate() {
        out.push_str(&format!(
            "{:<3} {:<width$} {}\n",
            i + 1,
            link.title,
            link.url,
            width = title_width
        ));
    }
    out
}

fn write_output(path: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::parse_from(["linkmee", "render", "--theme", "light", "--year", "2030"]);
        match cli.command {
            Commands::Render { theme, year, output } => {
                assert_eq!(theme, ThemeMode::Light);
                assert_eq!(year, Some(2030));
                assert!(output.is_none());
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_links_table() {
        let table = links_table(SITE.links);
        let rows: Vec<&str> = table.lines().skip(2).collect();
        assert_eq!(rows.len(), 5);
        assert!(rows[0].starts_with("1") && rows[0].contains("Portfolio"));
        assert!(rows[4].ends_with("https://discord.com/users/arull6593"));
    }
}
