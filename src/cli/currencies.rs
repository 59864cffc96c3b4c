use crate::cli::ui::{header_cell, new_styled_table};
use crate::core::currency::Currency;
use comfy_table::{Cell, Table};

/// Renders the configured currencies as a table.
pub fn currencies_table(currencies: &[Currency]) -> Table {
    let mut table = new_styled_table();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Code"),
        header_cell("Name"),
        header_cell("Symbol"),
    ]);
    for (index, currency) in currencies.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&currency.code),
            Cell::new(&currency.name),
            Cell::new(&currency.symbol),
        ]);
    }
    table
}
