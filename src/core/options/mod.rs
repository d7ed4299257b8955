pub mod request_file;

pub use request_file::*;
