pub mod data_table;
pub mod sortable_header_cell;

pub use data_table::{render_cell, DataTable, RowAction};
pub use sortable_header_cell::SortableHeaderCell;
