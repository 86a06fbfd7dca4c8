// src/extract.rs

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejection is an `AppError`, so bad bodies get `{ok:false,error}`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
