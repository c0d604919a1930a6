use actix_web::{get, web::ServiceConfig};

use crate::api::response::Response;

#[get("/")]
pub async fn health_check() -> Response {
    Response::ok("Server is running")
}

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(health_check);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{
        http::StatusCode,
        test::{self, TestRequest},
        App,
    };

    #[actix_web::test]
    async fn test_health_check_envelope() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = TestRequest::get().uri("/").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body = test::read_body(res).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "status": 200, "message": "Server is running" }));
    }
}
