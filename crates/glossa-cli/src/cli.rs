use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use clap::{ArgAction, Args, Parser, Subcommand};
use glossa_core::config::Config;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyVal {
    pub key: String,
    pub value: String,
}

impl std::str::FromStr for KeyVal {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (k, v) = s
            .split_once('=')
            .ok_or_else(|| anyhow!("expected KEY=VALUE, got: {s}"))?;
        Ok(Self {
            key: k.trim().to_string(),
            value: v.trim().to_string(),
        })
    }
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "glossa",
    version,
    about = "Glossa: browse approved glossary terms and propose new ones"
)]
pub struct GlobalCli {
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    #[arg(
        long = "set",
        value_parser = clap::builder::ValueParser::new(|s: &str| s.parse::<KeyVal>()),
        action = ArgAction::Append,
        global = true
    )]
    pub overrides: Vec<KeyVal>,

    #[arg(long = "token", env = "GLOSSA_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List approved terms, filtered and paginated.
    List(ListArgs),
    /// Propose a new term.
    Submit(TermArgs),
    /// Update an existing term.
    Edit(EditArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub theme: Option<String>,

    #[arg(long)]
    pub language: Option<String>,

    #[arg(long, short = 's')]
    pub search: Option<String>,

    #[arg(long, short = 'p', default_value_t = 1)]
    pub page: usize,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TermArgs {
    #[arg(long)]
    pub term: Option<String>,

    #[arg(long)]
    pub definition: Option<String>,

    #[arg(long)]
    pub translation: Option<String>,

    /// Category name, or "Other" together with --new-category.
    #[arg(long)]
    pub category: Option<String>,

    #[arg(long = "new-category")]
    pub new_category: Option<String>,

    #[arg(long)]
    pub theme: Option<String>,

    #[arg(long = "new-theme")]
    pub new_theme: Option<String>,

    #[arg(long)]
    pub language: Option<String>,

    #[arg(long = "new-language")]
    pub new_language: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct EditArgs {
    pub id: String,

    #[command(flatten)]
    pub fields: TermArgs,
}

pub fn init_tracing(verbose: u8, quiet: u8) -> anyhow::Result<()> {
    let default_level = if quiet >= 2 {
        "error"
    } else if quiet == 1 {
        "warn"
    } else if verbose >= 3 {
        "trace"
    } else if verbose == 2 {
        "debug"
    } else if verbose == 1 {
        "info"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}

/// `--config` when given, else the per-user config file if it exists.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let candidate = dirs::config_dir()?.join("glossa").join("glossa.toml");
    candidate.exists().then_some(candidate)
}

#[tracing::instrument(skip_all)]
pub fn load_config(
    explicit: Option<&Path>,
    overrides: &[KeyVal],
) -> anyhow::Result<Config> {
    let mut cfg = match resolve_config_path(explicit) {
        Some(path) => {
            info!(config = %path.display(), "loading config");
            Config::load_file(&path)?
        }
        None => {
            warn!("no glossa.toml found; using defaults");
            Config::default()
        }
    };

    cfg.apply_overrides(
        overrides
            .iter()
            .map(|kv| (kv.key.clone(), kv.value.clone())),
    )?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn keyval_requires_equals_sign() {
        let kv: KeyVal = "api.base_url = http://x".parse().expect("valid pair");
        assert_eq!(kv.key, "api.base_url");
        assert_eq!(kv.value, "http://x");
        assert!("nope".parse::<KeyVal>().is_err());
    }

    #[test]
    fn list_flags_parse() {
        let cli = GlobalCli::try_parse_from([
            "glossa",
            "list",
            "--category",
            "Noun",
            "--search",
            "chat",
            "-p",
            "2",
            "--set",
            "listing.page_size=5",
        ])
        .expect("arguments parse");

        assert_eq!(cli.overrides.len(), 1);
        let Command::List(args) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(args.category.as_deref(), Some("Noun"));
        assert_eq!(args.search.as_deref(), Some("chat"));
        assert_eq!(args.page, 2);
    }

    #[test]
    fn edit_takes_positional_id() {
        let cli = GlobalCli::try_parse_from([
            "glossa",
            "edit",
            "42",
            "--category",
            "Other",
            "--new-category",
            "verb",
        ])
        .expect("arguments parse");
        let Command::Edit(args) = cli.command else {
            panic!("expected edit command");
        };
        assert_eq!(args.id, "42");
        assert_eq!(args.fields.new_category.as_deref(), Some("verb"));
        assert!(args.fields.term.is_none());
    }

    #[test]
    fn load_config_reads_file_and_applies_overrides() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("glossa.toml");
        fs::write(
            &path,
            "[api]\nbase_url = \"https://glossa.example/api\"\n[listing]\npage_size = 20\n",
        )
        .expect("write config");

        let cfg = load_config(
            Some(&path),
            &[KeyVal {
                key: "listing.page_size".to_string(),
                value: "5".to_string(),
            }],
        )
        .expect("config loads");
        assert_eq!(cfg.api.base_url, "https://glossa.example/api");
        assert_eq!(cfg.listing.page_size, 5);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let temp = tempdir().expect("tempdir");
        let err = load_config(Some(&temp.path().join("absent.toml")), &[])
            .expect_err("file does not exist");
        assert!(format!("{err:#}").contains("absent.toml"));
    }
}
