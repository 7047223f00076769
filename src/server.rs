//! HTTP surface over the matcher.

use crate::matcher::IntentMatcher;
use crate::model::Catalog;
use actix_web::{get, post, web, HttpResponse, Responder};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct AskRequest {
    pub user_input: String,
}

#[derive(Serialize, Deserialize)]
pub struct AskResponse {
    pub response: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Shared between workers. The catalog is handed to the matcher per request.
pub struct AppState {
    pub catalog: RwLock<Catalog>,
    pub matcher: IntentMatcher,
}

impl AppState {
    pub fn new(catalog: Catalog, matcher: IntentMatcher) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            matcher,
        }
    }
}

#[post("/ask")]
async fn ask_endpoint(req: web::Json<AskRequest>, data: web::Data<AppState>) -> impl Responder {
    let catalog = data.catalog.read();
    match data.matcher.resolve(&req.user_input, &catalog.intents) {
        Ok(response) => HttpResponse::Ok().json(AskResponse { response }),
        Err(e) => {
            log::error!("Failed to resolve {:?}: {:?}", req.user_input, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}

#[get("/intents")]
async fn intents_endpoint(data: web::Data<AppState>) -> impl Responder {
    let catalog = data.catalog.read();
    HttpResponse::Ok().json(&*catalog)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(ask_endpoint).service(intents_endpoint);
}
