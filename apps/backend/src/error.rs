use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
}

/// Process-level errors: configuration and the HTTP surface.
///
/// Game rule violations never become an `AppError`; see
/// [`crate::errors::DomainError`].
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { code: &'static str, detail: String },
}

impl AppError {
    fn code(&self) -> String {
        match self {
            AppError::Config { .. } => "CONFIG_ERROR".to_string(),
            AppError::BadRequest { code, .. } => code.to_string(),
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::Config { detail } => detail.clone(),
            AppError::BadRequest { detail, .. } => detail.clone(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn bad_request(code: &'static str, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code();

        let problem_details = ProblemDetails {
            type_: format!("https://werewolf.local/errors/{}", code.to_uppercase()),
            title: Self::humanize_code(&code),
            status: status.as_u16(),
            detail: self.detail(),
            code,
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .json(problem_details)
    }
}
