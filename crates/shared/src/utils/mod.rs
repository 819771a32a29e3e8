mod logs;
mod metrics;
mod parse_datetime;
mod shutdown;

pub use self::logs::init_logger;
pub use self::metrics::{Labels, Method, Metrics, Outcome};
pub use self::parse_datetime::parse_datetime;
pub use self::shutdown::shutdown_signal;
