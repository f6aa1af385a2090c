//! Reusable UI component configuration.

pub mod data_table;

pub use data_table::{DataTableConfig, TableColumn, contacts_table_config};
