use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::ApiError;
use crate::metrics::{METRICS, UNKNOWN_ACTIVITY};
use crate::state::{lock, AppState};

#[derive(Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn list_activities(data: web::Data<AppState>) -> HttpResponse {
    let state = lock(&data);
    HttpResponse::Ok().json(&state.registry)
}

pub async fn signup_for_activity(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse, ApiError> {
    let activity_name = path.into_inner();
    let email = &query.email;

    let result = {
        let mut state = lock(&data);
        let enforce_capacity = state.enforce_capacity;
        state.registry.sign_up(&activity_name, email, enforce_capacity)
    };

    match result {
        Ok(message) => {
            METRICS.record_signup(&activity_name, "success");
            log::info!("{}", message);
            Ok(HttpResponse::Ok().json(serde_json::json!({ "message": message })))
        }
        Err(e) => {
            METRICS.record_signup(metric_label(&e, &activity_name), e.outcome());
            log::warn!("Signup of '{}' for '{}' rejected: {}", email, activity_name, e);
            Err(e)
        }
    }
}

pub async fn unregister_from_activity(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse, ApiError> {
    let activity_name = path.into_inner();
    let email = &query.email;

    let result = lock(&data).registry.unregister(&activity_name, email);

    match result {
        Ok(message) => {
            METRICS.record_unregister(&activity_name, "success");
            log::info!("{}", message);
            Ok(HttpResponse::Ok().json(serde_json::json!({ "message": message })))
        }
        Err(e) => {
            METRICS.record_unregister(metric_label(&e, &activity_name), e.outcome());
            log::warn!("Unregister of '{}' from '{}' rejected: {}", email, activity_name, e);
            Err(e)
        }
    }
}

fn metric_label<'a>(err: &ApiError, activity_name: &'a str) -> &'a str {
    match err {
        ApiError::ActivityNotFound => UNKNOWN_ACTIVITY,
        _ => activity_name,
    }
}
