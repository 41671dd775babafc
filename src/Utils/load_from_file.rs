//! Reading calculation tasks from a text file.
//!
//! A task file consists of sections. Every section starts with a header line `GAS` or `LIQUID`
//! (`GAS_DIFFUSION` and `LIQUID_DIFFUSION` are accepted too) followed by one JSON request or a
//! JSON array of requests. Lines before the first header are ignored, so a file can start with
//! free text notes.
//! ```text
//! Methane in natural gas, 25 C
//! GAS
//! { "substances": [ ... ], "target_substance": "CH4", "temperature": 25.0, ... }
//! LIQUID
//! [ { "method": "hayduk_laudie", "viscosity": 0.89, "molar_volume": 59.2 } ]
//! ```
use crate::Diffusion::diffusion_api::{GasRequest, LiquidRequest};
use crate::Diffusion::diffusion_errors::DiffusionError;
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SectionKind {
    Gas,
    Liquid,
}

impl SectionKind {
    fn from_header(line: &str) -> Option<Self> {
        match line.trim().to_uppercase().as_str() {
            "GAS" | "GAS_DIFFUSION" => Some(SectionKind::Gas),
            "LIQUID" | "LIQUID_DIFFUSION" => Some(SectionKind::Liquid),
            _ => None,
        }
    }
}

/// all requests found in a task file, in file order within each kind
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tasks {
    pub gas: Vec<GasRequest>,
    pub liquid: Vec<LiquidRequest>,
}

impl Tasks {
    pub fn is_empty(&self) -> bool {
        self.gas.is_empty() && self.liquid.is_empty()
    }
}

pub struct LoadData {
    pub file_name: String,
}

impl LoadData {
    pub fn new(file_name: String) -> Self {
        LoadData { file_name }
    }
    pub fn load_tasks(&self) -> Result<Tasks, DiffusionError> {
        load_tasks_from_file(&self.file_name)
    }
}

pub fn load_tasks_from_file(file_name: &str) -> Result<Tasks, DiffusionError> {
    let path = Path::new(file_name);
    if !path.exists() {
        return Err(DiffusionError::ParseError(format!(
            "File '{}' does not exist",
            file_name
        )));
    }
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;
    let tasks = parse_tasks(&lines)?;
    info!(
        "loaded {} gas and {} liquid tasks from '{}'",
        tasks.gas.len(),
        tasks.liquid.len(),
        file_name
    );
    Ok(tasks)
}

/// Splits the lines into sections and parses each section body as JSON.
pub fn parse_tasks(lines: &[String]) -> Result<Tasks, DiffusionError> {
    // (kind, first body line, end of body)
    let mut sections: Vec<(SectionKind, usize, usize)> = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if let Some(kind) = SectionKind::from_header(line) {
            if let Some(last) = sections.last_mut() {
                last.2 = i;
            }
            sections.push((kind, i + 1, lines.len()));
        }
    }
    if sections.is_empty() {
        return Err(DiffusionError::ParseError(
            "No 'GAS' or 'LIQUID' header found".to_string(),
        ));
    }
    let mut tasks = Tasks::default();
    for (kind, start, end) in sections {
        let body = lines[start..end].join("\n");
        if body.trim().is_empty() {
            warn!("empty {:?} section at line {}", kind, start);
            continue;
        }
        match kind {
            SectionKind::Gas => tasks.gas.extend(parse_section::<GasRequest>(&body, lines, start)?),
            SectionKind::Liquid => {
                tasks
                    .liquid
                    .extend(parse_section::<LiquidRequest>(&body, lines, start)?)
            }
        }
    }
    Ok(tasks)
}

/// one request or an array of requests
fn parse_section<T: DeserializeOwned>(
    body: &str,
    lines: &[String],
    start_index: usize,
) -> Result<Vec<T>, DiffusionError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| located_error(e, lines, start_index))?;
    let items = match value {
        Value::Array(items) => items,
        single => vec![single],
    };
    items
        .into_iter()
        .map(|item| {
            serde_json::from_value(item).map_err(|e| {
                let msg = format!("Invalid request in section at line {}: {}", start_index, e);
                error!("{}", msg);
                DiffusionError::ParseError(msg)
            })
        })
        .collect()
}

fn located_error(e: serde_json::Error, lines: &[String], start_index: usize) -> DiffusionError {
    let error_line = e.line();
    let error_column = e.column();
    // line number in the file, 1-based
    let actual_line = start_index + error_line;
    let error_msg = format!(
        "Error parsing task data at line {}, column {} (line {} in file): {}",
        error_line, error_column, actual_line, e
    );
    error!("{}", error_msg);
    if actual_line >= 1 && actual_line <= lines.len() {
        let problem_line = &lines[actual_line - 1];
        error!("Problematic line: {}", problem_line);
        if error_column >= 1 && error_column <= problem_line.len() + 1 {
            let pointer = " ".repeat(error_column - 1) + "^";
            error!("{}", pointer);
        }
    }
    DiffusionError::ParseError(error_msg)
}
