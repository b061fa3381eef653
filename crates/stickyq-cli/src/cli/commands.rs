use super::setup::{Cli, Commands};
use anyhow::{anyhow, Context, Result};
use serde_json::json;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use stickyq::attributes::{attribute_schema, COLLECTION_PARAMS};
use stickyq::config::{StickyConfig, CONFIG_FILE};
use stickyq::model::ItemId;
use stickyq::query::{parse_bool_ish, QueryAugmenter, QuerySpecification, RequestParams};
use stickyq::registry::{ContentTypeRegistry, EditOutcome, EditSubmission};
use stickyq::store::fs::JsonFileStore;
use tracing::debug;

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let store = JsonFileStore::new(&cli.store);
    let registry = ContentTypeRegistry::new(&config, store);

    match cli.command {
        Commands::Augment {
            input,
            pinned,
            pinned_first,
            content_type,
        } => {
            let base = read_query(input.as_deref())?;
            let params = RequestParams::parse(pinned.as_deref(), pinned_first.as_deref());
            let augmented = match content_type {
                Some(content_type) => registry.augment(&content_type, &base, &params),
                None => QueryAugmenter::from_config(&config).augment(&base, &params),
            };
            println!("{}", serde_json::to_string_pretty(&augmented)?);
        }
        Commands::Get { id } => {
            let id = parse_id(&id)?;
            println!("{}", registry.accessor().get(&id)?);
        }
        Commands::Set { id, value } => {
            let id = parse_id(&id)?;
            let value = parse_bool_ish(&value)
                .ok_or_else(|| anyhow!("Invalid value '{}': expected true or false", value))?;
            registry.accessor().set(&id, value)?;
            println!("{}", value);
        }
        Commands::Edit {
            id,
            content_type,
            checkbox,
            autosave,
        } => {
            let id = parse_id(&id)?;
            let mut submission = EditSubmission::new(id, &content_type, checkbox.as_deref());
            if autosave {
                submission = submission.autosave();
            }
            match registry.apply_edit(&submission)? {
                EditOutcome::Saved(value) => println!("Saved: {}", value),
                EditOutcome::SkippedAutosave => println!("Skipped: autosave"),
                EditOutcome::SkippedContentType => {
                    println!("Skipped: content type '{}' is not configured", content_type)
                }
            }
        }
        Commands::Schema => {
            let out = json!({
                "attribute": attribute_schema(),
                "params": COLLECTION_PARAMS,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Commands::Config => {
            print!("{}", StickyConfig::template());
        }
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<StickyConfig> {
    let path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    if explicit.is_some() && !path.exists() {
        return Err(anyhow!("Config file not found: {}", path.display()));
    }
    debug!(path = %path.display(), "loading config");
    StickyConfig::load(Some(&path)).context("Failed to load configuration")
}

fn read_query(input: Option<&Path>) -> Result<QuerySpecification> {
    let content = match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    if content.trim().is_empty() {
        return Ok(QuerySpecification::default());
    }
    serde_json::from_str(&content).context("Invalid query specification")
}

fn parse_id(raw: &str) -> Result<ItemId> {
    raw.parse()
        .map_err(|e| anyhow!("Invalid item id '{}': {}", raw, e))
}
