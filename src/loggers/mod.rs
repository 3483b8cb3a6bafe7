mod filelog;
mod logger;
pub mod logging;
mod termlog;

pub use self::logger::{Logger, LoggerBuilder};
pub use self::termlog::TerminalMode;
