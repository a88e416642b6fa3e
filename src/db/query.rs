//! View queries and text rendering
//!
//! A load fetches every row of the named view eagerly and replaces the prior
//! result wholesale. Rendering is pure text: header, dash separator, one line
//! per row, values joined by " | ".

use crate::config::DbConfig;
use crate::db::{connect, ConnectError};
use thiserror::Error;
use tiberius::time::chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tiberius::{Column, ColumnType, Row};
use unicode_width::UnicodeWidthStr;

/// Why a view load failed. Unlike the procedure path, the description here
/// is shown to the user verbatim.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Connect(#[from] ConnectError),
    #[error("query failed: {0}")]
    Query(#[from] tiberius::error::Error),
}

/// Represents a cell value in the result set
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    DateTime(String),
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Null => write!(f, "NULL"),
            CellValue::Bool(v) => write!(f, "{}", if *v { "true" } else { "false" }),
            CellValue::Int(v) => write!(f, "{}", v),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::String(v) => write!(f, "{}", v),
            CellValue::DateTime(v) => write!(f, "{}", v),
        }
    }
}

/// Column metadata
#[derive(Clone, Debug)]
pub struct ColumnInfo {
    pub name: String,
}

/// One full result set for a view.
///
/// Invariant: every row has exactly `columns.len()` values.
#[derive(Clone, Debug, Default)]
pub struct QueryResult {
    pub columns: Vec<ColumnInfo>,
    pub rows: Vec<Vec<CellValue>>,
}

impl QueryResult {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Fetch all rows of the named view.
///
/// The view name comes only from the static catalog, never from user input,
/// so interpolating this one identifier is acceptable. Columns are taken from
/// the result metadata so an empty view still reports its header.
pub async fn load_view(cfg: &DbConfig, view_name: &str) -> Result<QueryResult, LoadError> {
    let mut client = connect(cfg).await?;

    let mut stream = client
        .simple_query(format!("SELECT * FROM {}", view_name))
        .await?;

    let columns: Vec<ColumnInfo> = stream
        .columns()
        .await?
        .unwrap_or_default()
        .iter()
        .map(|c| ColumnInfo {
            name: c.name().to_string(),
        })
        .collect();

    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    for row in stream.into_first_result().await? {
        let cells: Vec<CellValue> = row
            .columns()
            .to_vec()
            .iter()
            .enumerate()
            .map(|(i, col)| extract_cell_value(&row, i, col))
            .collect();
        rows.push(cells);
    }

    Ok(QueryResult { columns, rows })
}

/// Render a result as preformatted text: header line, a dash separator of the
/// header's display width, then one line per row.
pub fn render_table(result: &QueryResult) -> String {
    let header: String = result
        .columns
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(" | ");

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.width()));
    out.push('\n');

    for row in &result.rows {
        let line: String = row
            .iter()
            .map(|cell| cell.to_string())
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str(&line);
        out.push('\n');
    }

    out
}

/// Render a load failure: fixed error line, then the cause's description.
pub fn render_load_error(err: &LoadError) -> String {
    format!("Error loading view data.\n{}", err)
}

fn extract_cell_value(row: &Row, index: usize, col: &Column) -> CellValue {
    match col.column_type() {
        ColumnType::Null => CellValue::Null,
        ColumnType::Bit | ColumnType::Bitn => row
            .get::<bool, _>(index)
            .map(CellValue::Bool)
            .unwrap_or(CellValue::Null),
        ColumnType::Int1 => row
            .get::<u8, _>(index)
            .map(|v| CellValue::Int(v as i64))
            .unwrap_or(CellValue::Null),
        ColumnType::Int2 => row
            .get::<i16, _>(index)
            .map(|v| CellValue::Int(v as i64))
            .unwrap_or(CellValue::Null),
        ColumnType::Int4 => row
            .get::<i32, _>(index)
            .map(|v| CellValue::Int(v as i64))
            .unwrap_or(CellValue::Null),
        ColumnType::Int8 => row
            .get::<i64, _>(index)
            .map(CellValue::Int)
            .unwrap_or(CellValue::Null),
        // Nullable integers arrive as Intn with the narrowest wire width.
        ColumnType::Intn => {
            if let Some(v) = row.try_get::<i64, _>(index).ok().flatten() {
                CellValue::Int(v)
            } else if let Some(v) = row.try_get::<i32, _>(index).ok().flatten() {
                CellValue::Int(v as i64)
            } else if let Some(v) = row.try_get::<i16, _>(index).ok().flatten() {
                CellValue::Int(v as i64)
            } else if let Some(v) = row.try_get::<u8, _>(index).ok().flatten() {
                CellValue::Int(v as i64)
            } else {
                CellValue::Null
            }
        }
        ColumnType::Float4 => row
            .get::<f32, _>(index)
            .map(|v| CellValue::Float(v as f64))
            .unwrap_or(CellValue::Null),
        ColumnType::Float8 => row
            .get::<f64, _>(index)
            .map(CellValue::Float)
            .unwrap_or(CellValue::Null),
        ColumnType::Floatn => {
            if let Some(v) = row.try_get::<f64, _>(index).ok().flatten() {
                CellValue::Float(v)
            } else if let Some(v) = row.try_get::<f32, _>(index).ok().flatten() {
                CellValue::Float(v as f64)
            } else {
                CellValue::Null
            }
        }
        ColumnType::Datetime | ColumnType::Datetime2 | ColumnType::Datetimen => row
            .get::<NaiveDateTime, _>(index)
            .map(|v| CellValue::DateTime(v.format("%Y-%m-%d %H:%M:%S").to_string()))
            .unwrap_or(CellValue::Null),
        ColumnType::Daten => row
            .get::<NaiveDate, _>(index)
            .map(|v| CellValue::DateTime(v.format("%Y-%m-%d").to_string()))
            .unwrap_or(CellValue::Null),
        ColumnType::Timen => row
            .get::<NaiveTime, _>(index)
            .map(|v| CellValue::DateTime(v.format("%H:%M:%S").to_string()))
            .unwrap_or(CellValue::Null),
        ColumnType::BigVarChar
        | ColumnType::BigChar
        | ColumnType::NVarchar
        | ColumnType::NChar
        | ColumnType::Text
        | ColumnType::NText => row
            .get::<&str, _>(index)
            .map(|v| CellValue::String(v.to_string()))
            .unwrap_or(CellValue::Null),
        _ => {
            // Fall back through the common conversions before giving up.
            if let Some(v) = row.try_get::<&str, _>(index).ok().flatten() {
                return CellValue::String(v.to_string());
            }
            if let Some(v) = row.try_get::<i64, _>(index).ok().flatten() {
                return CellValue::Int(v);
            }
            if let Some(v) = row.try_get::<f64, _>(index).ok().flatten() {
                return CellValue::Float(v);
            }
            if let Some(v) = row.try_get::<NaiveDateTime, _>(index).ok().flatten() {
                return CellValue::DateTime(v.format("%Y-%m-%d %H:%M:%S").to_string());
            }
            CellValue::Null
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(columns: &[&str], rows: Vec<Vec<CellValue>>) -> QueryResult {
        QueryResult {
            columns: columns
                .iter()
                .map(|name| ColumnInfo {
                    name: name.to_string(),
                })
                .collect(),
            rows,
        }
    }

    #[test]
    fn empty_view_renders_header_and_separator_only() {
        let r = result(&["barcode", "name", "weight"], Vec::new());
        let text = render_table(&r);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "barcode | name | weight");
        assert_eq!(lines[1], "-".repeat(lines[0].len()));
    }

    #[test]
    fn rows_render_joined_by_pipes() {
        let r = result(
            &["barcode", "weight"],
            vec![
                vec![CellValue::String("123".to_string()), CellValue::Int(4)],
                vec![CellValue::String("456".to_string()), CellValue::Null],
            ],
        );
        let text = render_table(&r);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "123 | 4");
        assert_eq!(lines[3], "456 | NULL");
    }

    #[test]
    fn separator_matches_header_width() {
        let r = result(&["a", "bb", "ccc"], Vec::new());
        let text = render_table(&r);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1].len(), lines[0].len());
    }

    #[test]
    fn rendering_is_idempotent() {
        let r = result(
            &["username", "first_name"],
            vec![vec![
                CellValue::String("jdoe".to_string()),
                CellValue::String("John".to_string()),
            ]],
        );
        assert_eq!(render_table(&r), render_table(&r));
    }

    #[test]
    fn every_row_arity_matches_header() {
        let r = result(
            &["a", "b"],
            vec![
                vec![CellValue::Int(1), CellValue::Int(2)],
                vec![CellValue::Null, CellValue::Bool(true)],
            ],
        );
        for row in &r.rows {
            assert_eq!(row.len(), r.columns.len());
        }
        let text = render_table(&r);
        for line in text.lines().skip(2) {
            assert_eq!(line.matches(" | ").count(), r.columns.len() - 1);
        }
    }

    #[test]
    fn cell_display_forms() {
        assert_eq!(CellValue::Null.to_string(), "NULL");
        assert_eq!(CellValue::Bool(false).to_string(), "false");
        assert_eq!(CellValue::Int(-3).to_string(), "-3");
        assert_eq!(CellValue::String(String::new()).to_string(), "");
        assert_eq!(
            CellValue::DateTime("2024-01-01".to_string()).to_string(),
            "2024-01-01"
        );
    }
}
