mod error;
mod http;
mod upstream;

pub use self::error::ErrorResponse;
pub use self::http::HttpError;
pub use self::upstream::UpstreamError;
