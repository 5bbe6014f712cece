use std::collections::HashMap;

use actix_web::{
    App, Error, HttpResponse, HttpResponseBuilder, Responder,
    dev::{ServiceFactory, ServiceRequest},
    get,
    http::{StatusCode, header},
    route, web,
};
use serde::Serialize;
use street_lines::{ParkingError, RectangleRecord, calculate_parking_rectangles};

use super::{get_bbox, get_orientation};

pub fn services<T: ServiceFactory<ServiceRequest, Config = (), Error = Error, InitError = ()>>(
    app: App<T>,
) -> App<T> {
    app.service(get_parking_rectangles).service(preflight)
}

#[derive(Debug, Serialize)]
struct ApiResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Vec<RectangleRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ApiResponse {
    fn data(data: Vec<RectangleRecord>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

fn with_cors(status: StatusCode) -> HttpResponseBuilder {
    let mut builder = HttpResponse::build(status);
    builder
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"));
    builder
}

// http://127.0.0.1:8080/api?latitude_top_left=55.2575578&longitude_top_left=11.537934&latitude_bottom_right=55.2506889&longitude_bottom_right=11.536422
#[get("/api")]
async fn get_parking_rectangles(query: web::Query<HashMap<String, String>>) -> impl Responder {
    let result = get_bbox(&query)
        .map_err(ParkingError::from)
        .and_then(|bbox| calculate_parking_rectangles(&bbox, get_orientation(&query)?));
    respond(result)
}

/// Bad input is the client's fault (400), anything else is ours (500).
fn respond(result: Result<Vec<RectangleRecord>, ParkingError>) -> HttpResponse {
    match result {
        Ok(data) => with_cors(StatusCode::OK).json(ApiResponse::data(data)),
        Err(e) if e.is_invalid_input() => {
            tracing::warn!(error = %e, "rejected parking rectangle request");
            let body = ApiResponse::error(format!("Invalid input parameters: {e}"));
            with_cors(StatusCode::BAD_REQUEST).json(body)
        }
        Err(e) => {
            tracing::error!(error = %e, "parking rectangle computation failed");
            let body = ApiResponse::error(format!("Server error: {e}"));
            with_cors(StatusCode::INTERNAL_SERVER_ERROR).json(body)
        }
    }
}

#[route("/api", method = "OPTIONS")]
async fn preflight() -> impl Responder {
    with_cors(StatusCode::NO_CONTENT).finish()
}
