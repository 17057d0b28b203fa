//! HTML table scraping.
//!
//! One HTTP GET with a browser-like user agent, then the first element
//! matching a CSS selector is parsed as a table: first row becomes the
//! header, remaining rows become data, and each column gets a simple
//! numeric type inference pass (all-int → `Int64`, all-float → `Float64`,
//! otherwise `String`; empty cells → null).

use polars::prelude::*;
use scraper::{ElementRef, Html, Selector};

use crate::error::{DataError, DataResult};

use super::{REQUEST_TIMEOUT, USER_AGENT};

/// Fetch `url` and parse the first table matching `css` into a [`DataFrame`].
///
/// Fails with [`DataError::HttpStatus`] on a non-success response and with
/// [`DataError::TableNotFound`] when nothing matches the selector.
pub fn scrape_table(url: &str, css: &str) -> DataResult<DataFrame> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    let resp = client
        .get(url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(DataError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = resp.text()?;
    table_from_html(&body, css)
}

/// Parse the first table matching `css` out of an HTML document.
///
/// The matched element may be the `<table>` itself or an ancestor containing
/// one. The first table row supplies column names.
pub fn table_from_html(html: &str, css: &str) -> DataResult<DataFrame> {
    let doc = Html::parse_document(html);
    let selector = parse_selector(css)?;

    let Some(node) = doc.select(&selector).next() else {
        return Err(DataError::TableNotFound {
            selector: css.to_string(),
        });
    };

    let table = if node.value().name() == "table" {
        node
    } else {
        node.select(&parse_selector("table")?)
            .next()
            .ok_or_else(|| DataError::TableNotFound {
                selector: css.to_string(),
            })?
    };

    let mut rows = extract_rows(table)?;
    if rows.is_empty() {
        return Err(DataError::TableNotFound {
            selector: css.to_string(),
        });
    }

    let headers = rows.remove(0);
    let ncols = headers.len();

    // Column-major cell storage; short rows are padded with nulls.
    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::with_capacity(rows.len()); ncols];
    for row in &rows {
        for (i, column) in cells.iter_mut().enumerate() {
            let value = row
                .get(i)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string);
            column.push(value);
        }
    }

    let columns: Vec<Column> = headers
        .iter()
        .zip(cells)
        .map(|(name, values)| infer_column(name, values))
        .collect();

    Ok(DataFrame::new_infer_height(columns)?)
}

fn parse_selector(css: &str) -> DataResult<Selector> {
    Selector::parse(css).map_err(|e| DataError::BadSelector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

fn extract_rows(table: ElementRef<'_>) -> DataResult<Vec<Vec<String>>> {
    let row_sel = parse_selector("tr")?;
    let cell_sel = parse_selector("th, td")?;

    let mut rows = Vec::new();
    for tr in table.select(&row_sel) {
        let cells: Vec<String> = tr
            .select(&cell_sel)
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .collect();
        if !cells.is_empty() {
            rows.push(cells);
        }
    }
    Ok(rows)
}

/// Build a typed column from text cells: `Int64` if every non-empty cell
/// parses as an integer, `Float64` if every non-empty cell parses as a
/// number, otherwise `String`.
fn infer_column(name: &str, values: Vec<Option<String>>) -> Column {
    let non_null: Vec<&str> = values.iter().flatten().map(String::as_str).collect();

    if !non_null.is_empty() && non_null.iter().all(|v| v.parse::<i64>().is_ok()) {
        let ints: Vec<Option<i64>> = values
            .iter()
            .map(|v| v.as_deref().and_then(|s| s.parse().ok()))
            .collect();
        return Series::new(name.into(), ints).into_column();
    }

    if !non_null.is_empty() && non_null.iter().all(|v| v.parse::<f64>().is_ok()) {
        let floats: Vec<Option<f64>> = values
            .iter()
            .map(|v| v.as_deref().and_then(|s| s.parse().ok()))
            .collect();
        return Series::new(name.into(), floats).into_column();
    }

    Series::new(name.into(), values).into_column()
}
