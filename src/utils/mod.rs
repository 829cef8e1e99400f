pub mod paths;

pub use paths::{SessionFile, find_latest_session, find_session_file, list_session_files};
