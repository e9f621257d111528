use actix_web::{error, http::StatusCode, HttpResponse};
use derive_more::{Display, Error};
use libdevlog::error::DevLogError;
use libdevlog::view::{StatusMessage, StatusMessageDescription};

#[derive(Debug, Display, Error)]
pub enum DevLogHttpError {
    AppDataDoesNotExist,

    // Translate DevLogError to DevLogHttpError
    InternalDevLogError(DevLogError),

    // External
    TemplateError(tera::Error),
}

impl From<DevLogError> for DevLogHttpError {
    fn from(error: DevLogError) -> Self {
        DevLogHttpError::InternalDevLogError(error)
    }
}

impl From<tera::Error> for DevLogHttpError {
    fn from(error: tera::Error) -> Self {
        DevLogHttpError::TemplateError(error)
    }
}

impl error::ResponseError for DevLogHttpError {
    fn error_response(&self) -> HttpResponse {
        match self {
            DevLogHttpError::AppDataDoesNotExist => {
                log::error!("AppData does not exist, make sure it is registered in main.rs");
                HttpResponse::InternalServerError().json(StatusMessage::internal_server_error())
            }
            DevLogHttpError::TemplateError(error) => {
                log::error!("Could not render template: {:?}", error);
                HttpResponse::InternalServerError().json(StatusMessage::internal_server_error())
            }
            DevLogHttpError::InternalDevLogError(error) => {
                if error.is_upstream() {
                    log::error!("Upstream request failed: {}", error);

                    HttpResponse::BadGateway().json(StatusMessageDescription::bad_gateway(
                        "Could not fetch commits from the repository host",
                    ))
                } else {
                    log::error!("Internal server error: {:?}", error);
                    HttpResponse::InternalServerError()
                        .json(StatusMessage::internal_server_error())
                }
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            DevLogHttpError::AppDataDoesNotExist => StatusCode::INTERNAL_SERVER_ERROR,
            DevLogHttpError::TemplateError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DevLogHttpError::InternalDevLogError(error) => {
                if error.is_upstream() {
                    StatusCode::BAD_GATEWAY
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;
    use libdevlog::error::DevLogError;

    use crate::errors::DevLogHttpError;

    #[test]
    fn test_upstream_errors_are_bad_gateway() {
        let err: DevLogHttpError =
            DevLogError::upstream_status(500, "http://127.0.0.1/repos/o/r/commits", "boom").into();
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.error_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_other_errors_are_internal() {
        let err: DevLogHttpError = DevLogError::owner_not_set().into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err: DevLogHttpError = tera::Error::msg("missing template").into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
