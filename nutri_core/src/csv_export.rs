//! CSV export of saved daily snapshots.

use crate::{DailySnapshot, Result};
use std::path::Path;

/// Write the snapshots to a CSV file with headers, replacing any existing file
///
/// Returns the number of rows written. The file is synced to disk before
/// returning.
pub fn export_csv(snapshots: &[DailySnapshot], csv_path: &Path) -> Result<usize> {
    if let Some(parent) = csv_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(csv_path)?;

    for snapshot in snapshots {
        writer.serialize(snapshot)?;
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    file.sync_all()?;

    tracing::info!("Exported {} days to {:?}", snapshots.len(), csv_path);
    Ok(snapshots.len())
}
