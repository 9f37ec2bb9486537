pub mod logging;
pub use logging::{LevelFilter, StdoutLogger, default_level, init_stdout_logger};

mod tensor;
pub use tensor::*;

mod vec2;
pub use vec2::*;

// Re-export log crate so downstream crates can use base::log::*
pub use log;
