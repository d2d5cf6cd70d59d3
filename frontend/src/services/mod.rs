pub mod api;
pub mod logging;
pub mod page;
pub mod prompt;
