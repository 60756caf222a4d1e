use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io;

use csv::StringRecord;

use crate::columns;
use crate::{JoinError, Result};

/// The right input read to the end and indexed by the value of the join
/// column. Built once ahead of the join, read-only afterwards; the right
/// input must fit in memory.
#[derive(Debug)]
pub struct MemoryTable {
    join_column: String,
    columns: StringRecord,
    rows: HashMap<String, StringRecord>,
}

impl MemoryTable {
    /// Reads `rdr` to the end and indexes every row under its join-column
    /// value. Fails when the header has no column named `join_column` or as
    /// soon as a key value repeats. Keys are literal strings; the empty
    /// string is a valid, distinct key.
    pub fn read_from<R>(rdr: &mut csv::Reader<R>, join_column: &str) -> Result<MemoryTable>
    where
        R: io::Read,
    {
        let columns = rdr.headers()?.clone();
        let key_idx = columns::index_of(columns.iter(), join_column)
            .ok_or_else(|| JoinError::ColumnNotFound(join_column.to_owned()))?;

        let mut rows = HashMap::new();
        for row in rdr.records() {
            let row = row?;
            let key = row.get(key_idx).unwrap_or("").to_owned();
            match rows.entry(key) {
                Entry::Occupied(e) => return Err(JoinError::DuplicateKey(e.key().clone())),
                Entry::Vacant(e) => {
                    e.insert(row);
                }
            }
        }

        Ok(MemoryTable {
            join_column: join_column.to_owned(),
            columns,
            rows,
        })
    }

    /// The full row stored under `key`, if any. Keys match by exact string
    /// comparison.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&StringRecord> {
        self.rows.get(key)
    }

    #[inline]
    pub fn columns(&self) -> &StringRecord {
        &self.columns
    }

    #[inline]
    pub fn join_column(&self) -> &str {
        &self.join_column
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryTable;
    use crate::JoinError;
    use csv::StringRecord;

    fn table_from(data: &str, join_column: &str) -> crate::Result<MemoryTable> {
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        MemoryTable::read_from(&mut rdr, join_column)
    }

    #[test]
    fn test_read_from() {
        let data = "\
ID,Name,Height,Weight
1,Yamada,171,50
5,Ichikawa,152,50
2,\"Hanako, Sato\",160,60
";
        let table = table_from(data, "ID").unwrap();

        assert_eq!(table.columns(), &vec!["ID", "Name", "Height", "Weight"]);
        assert_eq!(table.join_column(), "ID");

        assert_eq!(
            table.get("5"),
            Some(&StringRecord::from(vec!["5", "Ichikawa", "152", "50"]))
        );
        assert_eq!(
            table.get("2"),
            Some(&StringRecord::from(vec!["2", "Hanako, Sato", "160", "60"]))
        );
        assert_eq!(table.get("10"), None);
    }

    #[test]
    fn test_read_from_key_not_first_column() {
        let data = "Name,ID\nYamada,1\n";
        let table = table_from(data, "ID").unwrap();

        assert_eq!(
            table.get("1"),
            Some(&StringRecord::from(vec!["Yamada", "1"]))
        );
        assert_eq!(table.get("Yamada"), None);
    }

    #[test]
    fn test_read_from_duplicate_key() {
        let data = "ID,Height,Weight\n1,171,50\n1,160,60\n";
        let err = table_from(data, "ID").unwrap_err();

        assert!(matches!(err, JoinError::DuplicateKey(ref k) if k == "1"));
        assert_eq!(err.to_string(), "key `1` is duplicated");
    }

    #[test]
    fn test_read_from_column_not_found() {
        let data = "ID,Height,Weight\n1,171,50\n";
        let err = table_from(data, "Age").unwrap_err();

        assert!(matches!(err, JoinError::ColumnNotFound(ref c) if c == "Age"));
        assert_eq!(err.to_string(), "column `Age` is not found");
    }

    #[test]
    fn test_keys_are_exact_strings() {
        let data = "ID,Name\n5,Ichikawa\n05,Watanabe\n";
        let table = table_from(data, "ID").unwrap();

        assert_eq!(
            table.get("5"),
            Some(&StringRecord::from(vec!["5", "Ichikawa"]))
        );
        assert_eq!(
            table.get("05"),
            Some(&StringRecord::from(vec!["05", "Watanabe"]))
        );
    }

    #[test]
    fn test_empty_string_is_a_key() {
        let data = "ID,Name\n,Nameless\n1,Yamada\n";
        let table = table_from(data, "ID").unwrap();

        assert_eq!(
            table.get(""),
            Some(&StringRecord::from(vec!["", "Nameless"]))
        );
    }

    #[test]
    fn test_malformed_row_is_fatal() {
        let data = "ID,Name\n1\n";
        let err = table_from(data, "ID").unwrap_err();

        match err {
            JoinError::Csv(e) => {
                assert!(matches!(e.kind(), csv::ErrorKind::UnequalLengths { .. }))
            }
            other => panic!("want a csv error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input() {
        let err = table_from("", "ID").unwrap_err();
        assert!(matches!(err, JoinError::ColumnNotFound(ref c) if c == "ID"));
    }

    #[test]
    fn test_rows_only_header() {
        let table = table_from("ID,Name\n", "ID").unwrap();
        assert_eq!(table.get("1"), None);
    }
}
