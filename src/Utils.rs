/// reading calculation tasks from sectioned text files
pub mod load_from_file;
