use netview_types::OptionalPriority;

/// Cell text for an empty collection
pub const EMPTY_CELL: &str = "<NONE>";

/// Summarize a list of values into a single table cell.
///
/// Values are joined with `,` in the given order, stopping before the joined
/// text would exceed `max_width` characters. The first value is always kept,
/// even when it alone is wider. The count of dropped values is then appended
/// as ` + N more...`, so a summarized cell is wider than `max_width`.
pub fn summarize<S: AsRef<str>>(values: &[S], max_width: usize) -> String {
    let Some((first, rest)) = values.split_first() else {
        return EMPTY_CELL.to_string();
    };

    let mut cell = first.as_ref().to_string();
    let mut width = cell.chars().count();

    for (i, value) in rest.iter().enumerate() {
        let value = value.as_ref();
        let next_width = width + 1 + value.chars().count();
        if next_width > max_width {
            let remaining = rest.len() - i;
            cell.push_str(&format!(" + {} more...", remaining));
            return cell;
        }
        cell.push(',');
        cell.push_str(value);
        width = next_width;
    }

    cell
}

/// Render an optional priority: empty when absent, integer form when integral,
/// otherwise the shortest decimal that round-trips.
pub fn format_priority(priority: &OptionalPriority) -> String {
    match priority {
        OptionalPriority::Absent => String::new(),
        OptionalPriority::Integer(v) => v.to_string(),
        OptionalPriority::Float(v) => format_float(*v),
    }
}

fn format_float(value: f64) -> String {
    // f64's Display is already shortest-round-trip and never uses exponent notation
    let s = value.to_string();
    if s == "-0" { "0".to_string() } else { s }
}
