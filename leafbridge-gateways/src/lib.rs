pub mod logging;
pub mod print;
pub mod send_to_json_file;
