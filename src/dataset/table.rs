use super::records::Record;

/// An append-only sequence of rows sharing one column schema.
///
/// Batches are stacked in arrival order without reordering or deduplication;
/// the table is only ever written out once and read front to back.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<R: Record> {
    rows: Vec<R>,
}

impl<R: Record> Default for Table<R> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<R: Record> Table<R> {
    /// Materializes the first batch.
    pub fn create(rows: Vec<R>) -> Self {
        Self { rows }
    }

    /// Stacks another batch after the existing rows.
    pub fn append(&mut self, rows: Vec<R>) {
        self.rows.extend(rows);
    }

    /// Creates the table on the first call and appends on every later one.
    pub fn accumulate(table: Option<Table<R>>, rows: Vec<R>) -> Table<R> {
        match table {
            Some(mut existing) => {
                existing.append(rows);
                existing
            }
            None => Table::create(rows),
        }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
