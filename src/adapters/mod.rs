// Adapters layer: concrete RecordStore implementations behind the domain
// port. Both keep insertion order for find_all.

pub mod json_file;
pub mod memory;
