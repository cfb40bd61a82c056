use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use dialogprep::config::AppConfig;
use dialogprep::core::dialog::JsonDialogStore;
use dialogprep::core::preprocess::{
    FileStopwordLoader, NoStopwords, Pipeline, PreprocessError, PreprocessRun, StopwordCache,
    StopwordLoader,
};

const USAGE: &str = "usage: dialogprep <store.json> [--config <path>]";

struct Args {
    store: PathBuf,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut store = None;
    let mut config = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().ok_or("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            "--help" | "-h" => return Err(USAGE.to_string()),
            _ if store.is_none() => store = Some(PathBuf::from(&arg)),
            _ => return Err(format!("unexpected argument '{}'\n{}", arg, USAGE)),
        }
    }
    let store = store.ok_or_else(|| USAGE.to_string())?;
    Ok(Args { store, config })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
    };

    // Initialize logging
    let _log_guard = dialogprep::core::logging::init();
    log::info!("{} v{} starting", dialogprep::NAME, dialogprep::VERSION);

    let config = match &args.config {
        Some(path) => AppConfig::from_toml_file(path)?,
        None => AppConfig::load(),
    };

    let store = JsonDialogStore::open(&args.store)?;

    let loader: Arc<dyn StopwordLoader> =
        match FileStopwordLoader::from_config(&config.preprocess.stopwords) {
            Some(loader) => {
                log::info!("Reading stopword lists from {}", loader.dir().display());
                Arc::new(loader)
            }
            None => {
                log::warn!("No stopwords directory found; stopword removal is a no-op");
                Arc::new(NoStopwords)
            }
        };
    let cache = Arc::new(StopwordCache::new(loader));

    // No detector ships with the binary
    let pipeline = Pipeline::from_config(&config.preprocess, None, cache);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let run = PreprocessRun::new(&store, &pipeline, config.source.range(), config.run.clone());
    let stats = run.execute(|dialog| {
        let line = serde_json::to_string(&dialog).map_err(|e| PreprocessError::Stage {
            stage: "output",
            message: e.to_string(),
        })?;
        writeln!(out, "{line}")?;
        Ok(())
    })?;
    out.flush()?;

    log::info!(
        "Done: {} dialogs, {} skipped, {} messages, {} tokens",
        stats.dialogs_processed,
        stats.dialogs_skipped,
        stats.messages,
        stats.tokens
    );

    Ok(())
}
