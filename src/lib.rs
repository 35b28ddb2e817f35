pub mod sorter_core;
