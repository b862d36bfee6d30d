pub mod photo_cell;
pub mod report_table;
