use actix_web::http::header;
use actix_web::HttpRequest;

use crate::app_data::DevLogAppData;
use crate::errors::DevLogHttpError;

pub mod page_num_query;
pub use page_num_query::PageNumQuery;

pub fn app_data(req: &HttpRequest) -> Result<&DevLogAppData, DevLogHttpError> {
    req.app_data::<DevLogAppData>()
        .ok_or(DevLogHttpError::AppDataDoesNotExist)
}

/// The `Host` header as sent, or the server's configured host when it is missing.
/// Forwarding headers are not consulted.
pub fn request_host(req: &HttpRequest) -> String {
    req.headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(String::from)
        .unwrap_or_else(|| req.app_config().host().to_owned())
}
