//! One-shot mode invocation.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use biolit_application::render;
use biolit_core::ResultRecord;
use biolit_interaction::{ImageAttachment, ModeRequest};
use colored::Colorize;

pub async fn run(
    mode_tag: &str,
    input: Option<String>,
    criteria: Option<String>,
    study_types: Vec<String>,
    image: Option<PathBuf>,
    no_save: bool,
) -> Result<()> {
    let mode = super::parse_mode(mode_tag)?;
    let config = super::load_config();
    let gateway = super::build_gateway(&config)?;

    let input = match input {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading input from stdin")?;
            buffer.trim().to_string()
        }
    };

    let mut request = ModeRequest::text(input.clone());
    if let Some(criteria) = criteria {
        request = request.with_criteria(criteria);
    }
    if !study_types.is_empty() {
        request = request.with_study_types(study_types);
    }
    if let Some(path) = image {
        request = request.with_image(ImageAttachment::from_path(&path)?);
    }

    eprintln!("{}", format!("Running {}...", mode.spec().label).dimmed());
    let response = gateway.generate(mode, &request).await?;
    let record = ResultRecord::new(mode, input, response.content, response.grounding_sources);

    println!("{}", render::render(&record));

    if !no_save {
        let mut store = super::open_store(&config)?;
        store.append(record);
    }

    Ok(())
}
