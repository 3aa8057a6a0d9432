//! Named access to fields using the first row as header

use crate::types::{Row, Table};
use indexmap::IndexMap;

/// Table whose first row provides field names
///
/// Wraps an already parsed table; the parser itself knows nothing about
/// headers.
///
/// # Examples
///
/// ```
/// use csvforge::{parse, CsvConfig, HeaderedTable};
///
/// let table = parse("id,name\n1,Alice\n2,Bob\n", &CsvConfig::DEFAULT).unwrap();
/// let named = HeaderedTable::from_table(table).unwrap();
///
/// let names: Vec<_> = named.records().filter_map(|r| r.get("name")).collect();
/// assert_eq!(names, vec!["Alice", "Bob"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderedTable {
    headers: Row,
    // first column for each distinct header name
    columns: IndexMap<String, usize>,
    rows: Table,
}

impl HeaderedTable {
    /// Split off the first row as header; `None` for an empty table
    pub fn from_table(mut table: Table) -> Option<Self> {
        if table.is_empty() {
            return None;
        }
        let headers = table.remove(0);
        Some(Self::with_headers(headers, table))
    }

    /// Combine explicit header names with data rows
    pub fn with_headers(headers: Row, rows: Table) -> Self {
        let mut columns = IndexMap::with_capacity(headers.len());
        for (index, name) in headers.iter().enumerate() {
            columns.entry(name.clone()).or_insert(index);
        }
        HeaderedTable {
            headers,
            columns,
            rows,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Column index of the first header with this name
    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.get(name).copied()
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Data row at `index` with named access
    pub fn record(&self, index: usize) -> Option<NamedRecord<'_>> {
        self.rows.get(index).map(|values| NamedRecord {
            table: self,
            values,
        })
    }

    /// Iterate data rows with named access
    pub fn records(&self) -> impl Iterator<Item = NamedRecord<'_>> + '_ {
        self.rows.iter().map(move |values| NamedRecord {
            table: self,
            values,
        })
    }

    /// Give back header and data rows
    pub fn into_parts(self) -> (Row, Table) {
        (self.headers, self.rows)
    }
}

/// One data row viewed through the header names
#[derive(Debug, Clone, Copy)]
pub struct NamedRecord<'a> {
    table: &'a HeaderedTable,
    values: &'a [String],
}

impl<'a> NamedRecord<'a> {
    /// Value under the first header called `name`
    ///
    /// `None` when no such header exists or the row is shorter than the header.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        let index = self.table.column(name)?;
        self.values.get(index).map(String::as_str)
    }

    /// Raw field values in row order
    pub fn values(&self) -> &'a [String] {
        self.values
    }

    /// Header/value pairs in header order; stops at the shorter of the two
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        let table: &'a HeaderedTable = self.table;
        let values: &'a [String] = self.values;
        table
            .headers
            .iter()
            .zip(values.iter())
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Header to value map; the first occurrence of a duplicated header wins
    pub fn to_map(&self) -> IndexMap<&'a str, &'a str> {
        let mut map = IndexMap::with_capacity(self.values.len());
        for (name, value) in self.iter() {
            map.entry(name).or_insert(value);
        }
        map
    }
}
