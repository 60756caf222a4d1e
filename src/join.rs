use std::io;

use crate::columns;
use crate::table::MemoryTable;
use crate::{JoinError, Result};

/// Streams the left input through `table`, writing one output row per left
/// row, in input order: the left row's fields, then the matching right row's
/// fields minus the join column, blank when the key has no match. The left
/// input is never buffered beyond one row.
pub fn join<R, W>(
    left: &mut csv::Reader<R>,
    table: &MemoryTable,
    join_column: &str,
    out: &mut csv::Writer<W>,
) -> Result<()>
where
    R: io::Read,
    W: io::Write,
{
    let left_columns = left.headers()?.clone();
    let key_idx = columns::index_of(left_columns.iter(), join_column)
        .ok_or_else(|| JoinError::ColumnNotFound(join_column.to_owned()))?;

    let append_columns = columns::remove(table.columns().iter(), join_column);
    // the names come from the right header itself, so the lookup cannot miss;
    // on a duplicated name the first occurrence wins
    let append_idx: Vec<usize> = append_columns
        .iter()
        .filter_map(|name| columns::index_of(table.columns().iter(), name))
        .collect();

    out.write_record(left_columns.iter().chain(append_columns.iter().copied()))?;

    let mut row = csv::StringRecord::new();
    while left.read_record(&mut row)? {
        let key = row.get(key_idx).unwrap_or("");
        match table.get(key) {
            Some(matched) => out.write_record(
                row.iter()
                    .chain(append_idx.iter().map(|&i| matched.get(i).unwrap_or(""))),
            )?,
            None => out.write_record(row.iter().chain(append_idx.iter().map(|_| "")))?,
        }
    }
    Ok(())
}
