//! JSON list persistence shared by the card store and the progress log

mod json_list;

pub use json_list::{read_list, write_list, ListLoad, Result, StorageError};
