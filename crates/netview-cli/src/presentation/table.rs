use comfy_table::{ContentArrangement, Table, presets::NOTHING};
use netview_engine::TableData;

/// Render header and rows as kubectl-style aligned columns
pub fn format_table(data: &TableData) -> String {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(&data.header);

    for row in &data.rows {
        table.add_row(row);
    }

    // comfy-table pads every line; trailing blanks are noise in a terminal
    table
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
