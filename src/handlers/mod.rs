pub mod action_item_handlers;
pub mod decision_handlers;
pub mod information_handlers;
pub mod mom_handlers;

use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    web,
};

/// CSRF protection for REST API mutation endpoints.
///
/// Rejects POST/PUT/DELETE requests that don't have Content-Type:
/// application/json. Browsers cannot send cross-origin JSON with cookies via
/// simple form POST — the Content-Type check acts as a CSRF guard without
/// requiring tokens. GET requests are exempt (read-only, no state changes).
async fn require_json_content_type(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let method = req.method().clone();

    if method == actix_web::http::Method::POST
        || method == actix_web::http::Method::PUT
        || method == actix_web::http::Method::DELETE
    {
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.starts_with("application/json") {
            let body = serde_json::json!({
                "error": "Content-Type must be application/json for mutation requests"
            });
            let response = HttpResponse::BadRequest().json(body);
            return Ok(req.into_response(response).map_into_right_body());
        }
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}

/// Configure the MoM subsystem routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/mom")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            // Static segments BEFORE /{id} to avoid routing conflicts.
            .service(
                web::scope("/action-items")
                    .route("", web::post().to(action_item_handlers::create))
                    .route("", web::get().to(action_item_handlers::list))
                    .route(
                        "/user/{username}",
                        web::get().to(action_item_handlers::by_assigned),
                    )
                    .route(
                        "/overdue/all",
                        web::get().to(action_item_handlers::overdue),
                    )
                    .route(
                        "/due-soon/all",
                        web::get().to(action_item_handlers::due_soon),
                    )
                    .route(
                        "/reassigned/{username}",
                        web::get().to(action_item_handlers::by_reassigned),
                    )
                    .route(
                        "/stats/summary",
                        web::get().to(action_item_handlers::summary),
                    )
                    .route("/{id}", web::get().to(action_item_handlers::get))
                    .route("/{id}", web::put().to(action_item_handlers::update))
                    .route("/{id}", web::delete().to(action_item_handlers::delete))
                    .route(
                        "/{id}/remark",
                        web::post().to(action_item_handlers::add_remark),
                    ),
            )
            .service(
                web::scope("/information")
                    .route("", web::post().to(information_handlers::create))
                    .route("", web::get().to(information_handlers::list))
                    .route("/{id}", web::get().to(information_handlers::get))
                    .route("/{id}", web::put().to(information_handlers::update))
                    .route("/{id}", web::delete().to(information_handlers::delete)),
            )
            .service(
                web::scope("/decision")
                    .route("", web::post().to(decision_handlers::create))
                    .route("", web::get().to(decision_handlers::list))
                    .route("/{id}", web::get().to(decision_handlers::get))
                    .route("/{id}", web::put().to(decision_handlers::update))
                    .route("/{id}", web::delete().to(decision_handlers::delete)),
            )
            .route("", web::post().to(mom_handlers::create))
            .route("", web::get().to(mom_handlers::list))
            .route("/{id}", web::get().to(mom_handlers::get))
            .route("/{id}", web::put().to(mom_handlers::update))
            .route("/{id}", web::delete().to(mom_handlers::delete))
            .route("/{id}/status", web::put().to(mom_handlers::update_status))
            .route("/{id}/complete", web::get().to(mom_handlers::get_complete))
            .route(
                "/{id}/complete",
                web::delete().to(mom_handlers::delete_complete),
            ),
    );
}
