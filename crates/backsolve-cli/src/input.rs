//! Cash flow file loading.
//!
//! CSV files need an `amount,day_offset` header; a `reference_rate` column
//! is optional and defaults to zero. JSON files hold an array of entries
//! with the same field names.

use std::path::Path;

use backsolve_core::types::{CashFlowEntry, CashFlowStream};

use crate::error::{CliError, CliResult};

/// Reads and validates a cash flow stream, picking the parser by extension.
pub fn load_cash_flows(path: &Path) -> CliResult<CashFlowStream> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let entries = match extension.as_deref() {
        Some("csv") => read_csv(path)?,
        Some("json") => read_json(path)?,
        _ => return Err(CliError::UnsupportedInput(path.to_path_buf())),
    };

    let stream = CashFlowStream::new(entries)?;
    tracing::info!(
        path = %path.display(),
        entries = stream.len(),
        first_day = stream.first_day_offset(),
        last_day = stream.last_day_offset(),
        "loaded cash flows"
    );
    Ok(stream)
}

fn read_csv(path: &Path) -> CliResult<Vec<CashFlowEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|err| csv_error(path, err))?;

    reader
        .deserialize()
        .collect::<Result<Vec<CashFlowEntry>, _>>()
        .map_err(|err| csv_error(path, err))
}

fn read_json(path: &Path) -> CliResult<Vec<CashFlowEntry>> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|err| CliError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

fn csv_error(path: &Path, err: csv::Error) -> CliError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => CliError::Io {
            path: path.to_path_buf(),
            source,
        },
        _ => CliError::Parse {
            path: path.to_path_buf(),
            message,
        },
    }
}
