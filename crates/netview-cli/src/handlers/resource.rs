use crate::args::{OutputFormat, ResourceArgs};
use crate::presentation::{format_json, format_table};
use anyhow::{Context, Result};
use netview_engine::{Factory, ResourceKind, SORT_BY_KEY, Transformed};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Settings shared by every resource command
#[derive(Debug, Clone, Copy)]
pub struct RenderSettings {
    pub output: OutputFormat,
    pub max_column_width: usize,
}

pub fn handle<K: ResourceKind>(args: &ResourceArgs, settings: RenderSettings) -> Result<()> {
    let reader = open_input(args.file.as_deref())?;
    let output = render::<K, _>(reader, args, settings)?;

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

/// Transform the input and format it; an empty list renders as an empty string
pub fn render<K: ResourceKind, R: Read>(
    reader: R,
    args: &ResourceArgs,
    settings: RenderSettings,
) -> Result<String> {
    let options = transform_options(args);
    let transformed = Factory::<K>::new()
        .transform(reader, args.single, &options)
        .with_context(|| format!("Failed to transform {} input", K::KIND))?;

    tracing::info!(kind = K::KIND, count = transformed.len(), "transformed resources");

    match settings.output {
        OutputFormat::Json => format_json(&transformed),
        OutputFormat::Table => Ok(render_table(&transformed, settings.max_column_width)),
    }
}

fn render_table<R: netview_engine::TableRenderable>(
    transformed: &Transformed<R>,
    max_column_width: usize,
) -> String {
    match transformed.to_table(max_column_width) {
        Some(data) => format_table(&data),
        None => {
            eprintln!("No resources found.");
            String::new()
        }
    }
}

fn transform_options(args: &ResourceArgs) -> HashMap<String, String> {
    let mut options = HashMap::new();
    if let Some(sort_by) = &args.sort_by {
        options.insert(SORT_BY_KEY.to_string(), sort_by.clone());
    }
    options
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(p) if p != Path::new("-") => {
            let file = File::open(p)
                .with_context(|| format!("Failed to open input: {}", p.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(io::stdin().lock())),
    }
}
