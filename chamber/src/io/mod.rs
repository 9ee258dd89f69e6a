pub mod export;

pub use export::{export_to_obj, write_obj};
