use serde::Serialize;

/// Default cap for collection-valued cells
pub const DEFAULT_MAX_COLUMN_WIDTH: usize = 80;

/// A response that can be printed as a table row
pub trait TableRenderable {
    /// Column names, in display order
    fn header(&self) -> Vec<&'static str>;

    /// One cell per header column; collections are summarized to `max_column_width`
    fn row(&self, max_column_width: usize) -> Vec<String>;

    /// Whether the printer should re-sort rows before display.
    /// Kinds whose order comes from the list sorter return `false`.
    fn sort_rows(&self) -> bool;
}

/// Header plus rows, ready for a printer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableData {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Build table data from responses, honoring each kind's row-sorting policy.
///
/// Returns `None` when there is nothing to take a header from.
pub fn render_table<R: TableRenderable>(
    responses: &[R],
    max_column_width: usize,
) -> Option<TableData> {
    let first = responses.first()?;

    let header = first.header().into_iter().map(str::to_string).collect();
    let mut rows: Vec<Vec<String>> = responses.iter().map(|r| r.row(max_column_width)).collect();

    if first.sort_rows() {
        rows.sort();
    }

    Some(TableData { header, rows })
}
