pub mod backend;
pub mod completion;
pub mod diagnostics;
pub mod docs;
pub mod handlers;
pub mod utils;
