use std::io::{self, Write};

use bookshelf_core::{Book, CatalogSnapshot, FetchStatus};

use crate::cli::OutputFormat;
use crate::commands::{BoundsReport, Report};
use crate::error::CliError;

const TITLE_WIDTH: usize = 48;

pub fn render(report: &Report, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    write_report(&mut stdout.lock(), report, format, pretty)
}

fn write_report<W: Write>(
    writer: &mut W,
    report: &Report,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let text = match format {
        OutputFormat::Json => to_json(report, pretty)?,
        OutputFormat::Table => to_table(report),
    };
    writeln!(writer, "{text}")?;
    writer.flush()?;
    Ok(())
}

fn to_json(report: &Report, pretty: bool) -> Result<String, CliError> {
    let value = match report {
        Report::Books(snapshot) => serde_json::to_value(snapshot)?,
        Report::Bounds(bounds) => serde_json::to_value(bounds)?,
    };
    let payload = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(payload)
}

fn to_table(report: &Report) -> String {
    match report {
        Report::Books(snapshot) => books_table(snapshot),
        Report::Bounds(bounds) => bounds_table(bounds),
    }
}

fn books_table(snapshot: &CatalogSnapshot) -> String {
    let mut lines = vec![
        format!("status      : {}", snapshot.status),
        format!(
            "range       : {:.2} - {:.2} (max {:.2})",
            snapshot.range.low, snapshot.range.high, snapshot.max_price
        ),
    ];

    match snapshot.status {
        FetchStatus::Failed => {
            let reason = snapshot.error.as_deref().unwrap_or("unknown error");
            lines.push(format!("error       : {reason}"));
        }
        FetchStatus::Success if snapshot.books.is_empty() => {
            lines.push(String::from("No Search Results Found"));
        }
        FetchStatus::Success => {
            lines.push(format!(
                "showing     : {} of {}",
                snapshot.books.len(),
                snapshot.total
            ));
            lines.extend(snapshot.books.iter().map(book_row));
        }
        FetchStatus::Idle | FetchStatus::Loading => {
            lines.push(String::from("no catalog loaded"));
        }
    }

    lines.join("\n")
}

fn book_row(book: &Book) -> String {
    let title = if book.title.is_empty() {
        "(untitled)"
    } else {
        book.title.as_str()
    };
    let title: String = if title.chars().count() > TITLE_WIDTH {
        let mut cut: String = title.chars().take(TITLE_WIDTH - 1).collect();
        cut.push('…');
        cut
    } else {
        title.to_owned()
    };
    format!("{:<13}  {:>9}  {title}", book.isbn13, book.price)
}

fn bounds_table(bounds: &BoundsReport) -> String {
    let query = if bounds.query.is_empty() {
        "(latest)"
    } else {
        bounds.query.as_str()
    };
    let mut lines = vec![
        format!("status      : {}", bounds.status),
        format!("query       : {query}"),
        format!("books       : {}", bounds.total),
        format!("max_price   : {:.2}", bounds.max_price),
    ];
    if let Some(error) = &bounds.error {
        lines.push(format!("error       : {error}"));
    }
    lines.join("\n")
}
