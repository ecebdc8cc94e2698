//! `.lsltreerc` configuration file parser.
//!
//! The rc file uses the same line-oriented command syntax as TF-style rc
//! files:
//!
//! | Directive | Action |
//! |-----------|--------|
//! | `/set <name>=<value>` or `/set <name> <value>` | set an option |
//! | Lines starting with `;` | comment, ignored |
//! | Any other `/command` | silently skipped |
//!
//! Recognised options:
//!
//! | Name | Values | Default |
//! |------|--------|---------|
//! | `long_integers` | `0`/`1`/`off`/`on` | off |
//! | `format` | `tree`/`json` | `tree` |
//! | `log` | `error`/`warn`/`info`/`debug`/`trace` | `warn` |

use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::Level;

use crate::compiler::ResolverOptions;

// ── Public API ────────────────────────────────────────────────────────────────

/// A non-fatal error encountered while loading a config file.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct ConfigError {
    pub line: usize,
    pub message: String,
}

/// How the CLI prints a compiled tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented outline (the `Display` form of a node).
    #[default]
    Tree,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tree" => Ok(OutputFormat::Tree),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// Front-end settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub long_integers: bool,
    pub format: OutputFormat,
    pub log: Level,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            long_integers: false,
            format: OutputFormat::default(),
            log: Level::WARN,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolver_options(&self) -> ResolverOptions {
        ResolverOptions {
            enable_long_integers: self.long_integers,
        }
    }

    /// Parse an rc string.
    ///
    /// Bad lines, including unknown `/set` options, are reported and skipped;
    /// the remaining settings still apply.
    pub fn load_str(s: &str) -> (Self, Vec<ConfigError>) {
        let mut config = Config::new();
        let mut errors = Vec::new();

        for (i, raw) in s.lines().enumerate() {
            let lineno = i + 1;
            let line = raw.trim();

            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            let Some(rest) = line.strip_prefix('/') else { continue };

            let (cmd, args_str) = rest
                .split_once(|c: char| c.is_ascii_whitespace())
                .unwrap_or((rest, ""));

            if cmd == "set" {
                let tokens = split_args(args_str.trim());
                if let Err(msg) = parse_set(&tokens, &mut config) {
                    errors.push(ConfigError { line: lineno, message: msg });
                }
            }
        }

        (config, errors)
    }

    /// Read and parse an rc file from disk.
    pub fn load_file(path: &Path) -> std::io::Result<(Self, Vec<ConfigError>)> {
        let s = std::fs::read_to_string(path)?;
        Ok(Self::load_str(&s))
    }
}

/// Search for the user rc file: `$HOME/.lsltreerc`, then `./.lsltreerc`.
pub fn find_user_config() -> Option<PathBuf> {
    let home = std::env::var("HOME").unwrap_or_default();
    [format!("{home}/.lsltreerc"), "./.lsltreerc".to_owned()]
        .into_iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}

// ── Argument tokenizer ────────────────────────────────────────────────────────

/// Split `s` into whitespace-delimited tokens, honouring double-quoted strings
/// and `\"` escapes within them.
fn split_args(s: &str) -> Vec<String> {
    let mut args: Vec<String> = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;
    let mut chars = s.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => in_quotes = !in_quotes,
            '\\' if in_quotes => {
                if let Some(escaped) = chars.next() {
                    cur.push(escaped);
                }
            }
            c if c.is_ascii_whitespace() && !in_quotes => {
                if !cur.is_empty() {
                    args.push(std::mem::take(&mut cur));
                }
            }
            c => cur.push(c),
        }
    }
    if !cur.is_empty() {
        args.push(cur);
    }
    args
}

// ── /set ──────────────────────────────────────────────────────────────────────

fn parse_set(tokens: &[String], config: &mut Config) -> Result<(), String> {
    if tokens.is_empty() {
        return Err("/set: requires an argument".into());
    }

    let (name, value) = if let Some((name, value)) = tokens[0].split_once('=') {
        (name.to_owned(), value.to_owned())
    } else if tokens.len() >= 2 {
        (tokens[0].clone(), tokens[1..].join(" "))
    } else {
        return Err(format!("/set: missing value for '{}'", tokens[0]));
    };

    match name.as_str() {
        "" => return Err("/set: variable name cannot be empty".into()),
        "long_integers" => config.long_integers = parse_flag(&value)?,
        "format" => config.format = value.parse()?,
        "log" => {
            config.log = value
                .parse()
                .map_err(|_| format!("/set log: unknown level '{value}'"))?
        }
        other => return Err(format!("/set: unknown option '{other}' ignored")),
    }
    Ok(())
}

fn parse_flag(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "on" | "true" | "yes" => Ok(true),
        "0" | "off" | "false" | "no" => Ok(false),
        other => Err(format!("expected on/off, got '{other}'")),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
