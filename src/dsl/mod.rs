pub mod error;
pub mod handlers;

pub use error::DslError;

use crate::core::dish::Dish;
use crate::core::schema::Column;
use crate::engine::CatalogueStore;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum DslOutput {
    None,
    Message(String),
    /// The full table
    Dishes(Vec<Dish>),
    /// Recommendation hits
    Suggestions(Vec<Dish>),
    Dish(Dish),
    Options { column: Column, values: Vec<String> },
}

const SUGGESTION_COLUMNS: [Column; 3] = [Column::DishName, Column::Cuisine, Column::Region];

fn write_table(f: &mut fmt::Formatter<'_>, columns: &[Column], dishes: &[Dish]) -> fmt::Result {
    let rows: Vec<Vec<String>> = dishes
        .iter()
        .map(|d| columns.iter().map(|c| d.value(*c)).collect())
        .collect();

    let mut widths: Vec<usize> = columns.iter().map(|c| c.header().chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = columns.iter().map(|c| c.header().to_string()).collect();
    write_row(f, &header, &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(f, "{}", rule.join("-+-"))?;
    for row in &rows {
        write_row(f, row, &widths)?;
    }
    Ok(())
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    writeln!(f, "{}", padded.join(" | ").trim_end())
}

impl fmt::Display for DslOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DslOutput::None => Ok(()),
            DslOutput::Message(s) => write!(f, "{}", s),
            DslOutput::Dishes(dishes) => {
                if dishes.is_empty() {
                    return write!(f, "The catalogue is empty.");
                }
                write_table(f, &Column::ALL, dishes)?;
                write!(f, "({} dishes)", dishes.len())
            }
            DslOutput::Suggestions(dishes) => {
                if dishes.is_empty() {
                    return write!(f, "No dishes found. Try different filters.");
                }
                writeln!(f, "Suggested Dishes:")?;
                write_table(f, &SUGGESTION_COLUMNS, dishes)
            }
            DslOutput::Dish(dish) => {
                for column in Column::ALL {
                    writeln!(f, "{:<14} {}", format!("{}:", column.header()), dish.value(column))?;
                }
                Ok(())
            }
            DslOutput::Options { column, values } => {
                writeln!(f, "{}:", column.header())?;
                for value in values {
                    writeln!(f, "  - {}", value)?;
                }
                Ok(())
            }
        }
    }
}

const HELP: &str = "\
Commands:
  RECOMMEND meal=\"...\" spice=Mild|Medium|Hot weather=\"...\" [COMFORT] [MASALA] [DESSERT]
  LIST
  SHOW \"dish name\"
  ADD name=\"...\" [field=value ...]
  UPDATE \"dish name\" SET field=value [field=value ...]
  DELETE \"dish name\"
  OPTIONS column
  VALUES column
Fields: name, cuisine, meal, comfort, masala, dessert, spice, time, mood, weather, dietary, occasion, region";

/// Run a script, one command per line. Stops at the first failing line.
pub fn execute_script(store: &mut CatalogueStore, script: &str) -> Result<Vec<DslOutput>, DslError> {
    let mut outputs = Vec::new();
    for (idx, raw_line) in script.lines().enumerate() {
        let output = execute_line(store, raw_line, idx + 1)?;
        if !matches!(output, DslOutput::None) {
            outputs.push(output);
        }
    }
    Ok(outputs)
}

/// Execute a single command line
pub fn execute_line(
    store: &mut CatalogueStore,
    line: &str,
    line_no: usize,
) -> Result<DslOutput, DslError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
        return Ok(DslOutput::None);
    }

    let (keyword, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    match keyword.to_ascii_uppercase().as_str() {
        "RECOMMEND" => handlers::recommend::handle_recommend(store, rest, line_no),
        "LIST" => handlers::catalogue::handle_list(store, rest, line_no),
        "SHOW" => handlers::catalogue::handle_show(store, rest, line_no),
        "ADD" => handlers::catalogue::handle_add(store, rest, line_no),
        "UPDATE" => handlers::catalogue::handle_update(store, rest, line_no),
        "DELETE" => handlers::catalogue::handle_delete(store, rest, line_no),
        "OPTIONS" => handlers::options::handle_options(store, rest, line_no, false),
        "VALUES" => handlers::options::handle_options(store, rest, line_no, true),
        "HELP" => Ok(DslOutput::Message(HELP.to_string())),
        _ => Err(DslError::parse(
            line_no,
            format!("Unknown command: {}", line),
        )),
    }
}
