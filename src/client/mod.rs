// HTTP client for the fleet API, used by the `fleet` command-line tool.

pub mod api;
pub mod render;
