use std::io::Read;
use std::path::Path;

use lsl_tree::cli::{self, ConfigFile};
use lsl_tree::compiler::compile_source;
use lsl_tree::config::{self, Config, OutputFormat};
use tracing::Level;

fn read_source(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p),
        None => {
            let mut s = String::new();
            std::io::stdin().read_to_string(&mut s)?;
            Ok(s)
        }
    }
}

fn main() {
    let args = match cli::parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("lsltree: {e}");
            eprintln!("Usage: lsltree [-f[<file>]] [-l] [-j] [-d] [<source>]");
            eprintln!("       (use `-f -- <source>` to skip the rc file)");
            std::process::exit(2);
        }
    };

    // ── Load rc file ──────────────────────────────────────────────────────────
    let rc_path = match &args.config {
        ConfigFile::Skip => None,
        ConfigFile::Explicit(path) => Some(path.clone()),
        ConfigFile::Search => config::find_user_config(),
    };
    let mut cfg = Config::new();
    let mut warnings = Vec::new();
    if let Some(path) = rc_path {
        match Config::load_file(&path) {
            Ok((loaded, errs)) => {
                cfg = loaded;
                warnings.extend(errs.iter().map(|e| format!("{}: {e}", path.display())));
            }
            Err(e) => warnings.push(format!("{}: {e}", path.display())),
        }
    }

    // Command-line flags win over the rc file.
    if args.long_integers {
        cfg.long_integers = true;
    }
    if args.json {
        cfg.format = OutputFormat::Json;
    }
    if args.debug {
        cfg.log = Level::DEBUG;
    }

    tracing_subscriber::fmt()
        .with_max_level(cfg.log)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    for w in &warnings {
        eprintln!("lsltree: warning: {w}");
    }

    // ── Compile ───────────────────────────────────────────────────────────────
    let src = match read_source(args.source.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            let name = args
                .source
                .as_ref()
                .map_or_else(|| "<stdin>".to_owned(), |p| p.display().to_string());
            eprintln!("lsltree: {name}: {e}");
            std::process::exit(2);
        }
    };

    let (tree, errors) = compile_source(&src, &cfg.resolver_options());

    match cfg.format {
        OutputFormat::Tree => print!("{tree}"),
        OutputFormat::Json => match serde_json::to_string_pretty(&tree) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("lsltree: {e}");
                std::process::exit(2);
            }
        },
    }

    for e in &errors {
        eprintln!("lsltree: {e}");
    }
    if !errors.is_empty() {
        std::process::exit(1);
    }
}
