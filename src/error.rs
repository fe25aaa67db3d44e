use std::collections::BTreeMap;

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use validator::ValidationErrors;

const PROBLEM_JSON: &str = "application/problem+json";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("resource not found")]
    NotFound,
    #[error("validation failed")]
    Validation(ValidationProblem),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Internal(anyhow::Error::new(err))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.into())
    }
}

impl From<ValidationProblem> for AppError {
    fn from(problem: ValidationProblem) -> Self {
        Self::Validation(problem)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::Validation(problem) => problem.into_response(),
            AppError::Internal(err) => {
                tracing::error!(error = ?err, "request failed");
                let body = json!({
                    "type": "https://tools.ietf.org/html/rfc9110#section-15.6.1",
                    "title": "An error occurred while processing your request.",
                    "status": StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                });
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, PROBLEM_JSON)],
                    Json(body),
                )
                    .into_response()
            },
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Per-field validation failures, keyed by the camelCase wire name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationProblem {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationProblem {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut problem = Self::default();
        problem.add(field, message);
        problem
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }
}

impl From<ValidationErrors> for ValidationProblem {
    fn from(errors: ValidationErrors) -> Self {
        let mut problem = Self::default();
        for (field, failures) in errors.field_errors() {
            let key = camel_case(&field);
            for failure in failures {
                let message = match &failure.message {
                    Some(message) => message.to_string(),
                    None => format!("The field {key} is invalid ({}).", failure.code),
                };
                problem.add(key.clone(), message);
            }
        }
        problem
    }
}

impl IntoResponse for ValidationProblem {
    fn into_response(self) -> Response {
        let body = json!({
            "type": "https://tools.ietf.org/html/rfc9110#section-15.5.1",
            "title": "One or more validation errors occurred.",
            "status": StatusCode::BAD_REQUEST.as_u16(),
            "errors": self.errors(),
        });
        (StatusCode::BAD_REQUEST, [(header::CONTENT_TYPE, PROBLEM_JSON)], Json(body)).into_response()
    }
}

/// `data_lancamento` -> `dataLancamento`, matching the serde rename on the DTOs.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
