use std::path::Path;

use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::model::DocumentRecord;
use crate::Result;

/// Renders the records as a printable table, one row per record in the given order.
pub fn render_table(records: &[DocumentRecord]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        DocumentRecord::COLUMNS
            .iter()
            .map(|c| Cell::new(c).add_attribute(Attribute::Bold)),
    );
    for record in records {
        table.add_row(record.cells());
    }
    table
}

/// Writes the records to `path` as CSV with a header row and no index column.
pub fn write_csv(path: &Path, records: &[DocumentRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
