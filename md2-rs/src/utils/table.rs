//! Table output for the md2-rs commands

use prettytable::format::{Alignment, consts::FORMAT_NO_LINESEP_WITH_TITLE};
use prettytable::{Cell, Row, Table};

/// Create a table with bold column titles
pub fn create_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_format(*FORMAT_NO_LINESEP_WITH_TITLE);
    let titles = headers.iter().map(|h| Cell::new(h).style_spec("b")).collect();
    table.set_titles(Row::new(titles));
    table
}

/// Append a row; cells holding a plain number are right-aligned
pub fn add_table_row<I, S>(table: &mut Table, cells: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let row_cells = cells.into_iter().map(|s| value_cell(s.as_ref())).collect();
    table.add_row(Row::new(row_cells));
}

/// Print the table, or `empty` when it has no rows
pub fn print_table(table: &Table, empty: &str) {
    if table.is_empty() {
        println!("{empty}");
    } else {
        table.printstd();
    }
}

fn value_cell(text: &str) -> Cell {
    if text.parse::<f64>().is_ok() {
        Cell::new_align(text, Alignment::RIGHT)
    } else {
        Cell::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_right_aligned() {
        let mut table = create_table(&["Index", "Name"]);
        add_table_row(&mut table, ["7", "run"]);
        assert_eq!(table.len(), 1);

        let text = table.to_string();
        assert!(text.contains("    7 "), "{text}");
        assert!(text.contains(" run  "), "{text}");
    }

    #[test]
    fn test_empty_table() {
        let table = create_table(&["Index"]);
        assert!(table.is_empty());
    }
}
