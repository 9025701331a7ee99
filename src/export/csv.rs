//! CSV export loop.
//!
//! Streams a Notion database to CSV: one schema fetch to fix the header,
//! then sequential page queries following the continuation cursor, one CSV
//! line per row. The sink is flushed after every page so partial progress is
//! durable before the next network round trip.

use std::io::Write;

use anyhow::{Context, Result};
use csv::Writer;
use log::{debug, info};

use crate::api::models::{Database, Page, QueryRequest, Sort};
use crate::api::NotionClient;
use crate::config::{SortDirection, CREATED_TIME_TIMESTAMP};
use crate::error_handling::ExportError;
use crate::export::format_property;

/// Options controlling the export query.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Property to sort by; the created-time timestamp when `None`.
    pub sort_property: Option<String>,
    /// Sort direction.
    pub direction: SortDirection,
    /// Rows per page request; the service default when `None`.
    pub page_size: Option<u32>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            sort_property: None,
            direction: SortDirection::Descending,
            page_size: None,
        }
    }
}

impl ExportOptions {
    /// Builds the request body for one page. Every request carries exactly
    /// one sort directive.
    fn build_request(&self, cursor: Option<String>) -> QueryRequest {
        let sort = match &self.sort_property {
            Some(property) => Sort::Property {
                property: property.clone(),
                direction: self.direction,
            },
            None => Sort::Timestamp {
                timestamp: CREATED_TIME_TIMESTAMP.to_string(),
                direction: self.direction,
            },
        };
        QueryRequest {
            start_cursor: cursor,
            sorts: vec![sort],
            page_size: self.page_size,
        }
    }
}

/// Summary of a finished export.
#[derive(Debug, Clone, Copy)]
pub struct ExportStats {
    /// Columns in the CSV header.
    pub columns: usize,
    /// Data rows written.
    pub rows: usize,
    /// Pages fetched from the API.
    pub pages: usize,
}

/// Returns the CSV header: every exportable column, in schema order.
fn build_header(database: &Database) -> Vec<String> {
    database
        .properties
        .iter()
        .filter(|(_, config)| config.is_exportable())
        .map(|(name, _)| name.clone())
        .collect()
}

/// Formats one row into cells, in header order.
///
/// A row that lacks a header column, or carries a property the formatter
/// rejects, fails the whole export; no cells of the failing row are written.
fn build_row(page: &Page, header: &[String]) -> Result<Vec<String>> {
    let mut cells = Vec::with_capacity(header.len());
    for column in header {
        let value = page
            .properties
            .get(column)
            .ok_or_else(|| ExportError::MissingColumn {
                page_id: page.id.clone(),
                column: column.clone(),
            })?;
        let cell = format_property(value)
            .with_context(|| format!("Failed to format column {column:?} of row {}", page.id))?;
        cells.push(cell);
    }
    Ok(cells)
}

/// Exports every row of a database as CSV into `sink`.
///
/// Fetches the schema once to fix the header (columns in service order,
/// buttons excluded), then pages through the query endpoint sequentially,
/// writing one CSV line per row in the order the service returns them.
///
/// # Errors
///
/// Any failure aborts the whole export: a failed schema or page fetch, a row
/// missing a header column, a property the formatter rejects, or a sink
/// write error. Rows already flushed remain in the sink.
pub async fn export_database<W: Write>(
    client: &NotionClient,
    database_id: &str,
    options: &ExportOptions,
    sink: W,
) -> Result<ExportStats> {
    let database = client
        .get_database(database_id)
        .await
        .context("Failed to fetch database schema")?;

    let header = build_header(&database);
    info!(
        "Exporting database {} ({} columns)",
        database.id,
        header.len()
    );

    let mut writer = Writer::from_writer(sink);
    writer
        .write_record(&header)
        .context("Failed to write CSV header")?;

    let mut stats = ExportStats {
        columns: header.len(),
        rows: 0,
        pages: 0,
    };
    let mut cursor: Option<String> = None;

    loop {
        let request = options.build_request(cursor.take());
        let page = client
            .query_database(database_id, &request)
            .await
            .with_context(|| format!("Failed to query page {}", stats.pages + 1))?;

        for row in &page.results {
            let cells = build_row(row, &header)?;
            writer
                .write_record(&cells)
                .context("Failed to write CSV row")?;
            stats.rows += 1;
        }

        writer.flush().context("Failed to flush CSV output")?;
        stats.pages += 1;
        debug!(
            "Page {}: {} rows (has_more: {})",
            stats.pages,
            page.results.len(),
            page.has_more
        );

        if !page.has_more {
            break;
        }
        cursor = page.next_cursor;
    }

    info!("Exported {} rows across {} pages", stats.rows, stats.pages);
    Ok(stats)
}
