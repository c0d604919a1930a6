use actix_web::{get, web, HttpRequest, HttpResponse};
use log::{debug, info};

use crate::modules::user::service::UserService;

const USERS_PREFIX: &str = "/users/";

/// Strips one leading `/users/` from `path`. Paths without the prefix come
/// back unchanged; nothing is decoded or trimmed.
pub fn user_id_from_path(path: &str) -> &str {
    path.strip_prefix(USERS_PREFIX).unwrap_or(path)
}

pub struct UserHandler {
    service: Box<dyn UserService + Send + Sync>,
}

impl UserHandler {
    pub fn new(service: impl UserService + Send + Sync + 'static) -> Self {
        info!("UserHandler initialized");
        UserHandler { service: Box::new(service) }
    }

    /// Looks up the user named by the request path and writes it as JSON.
    /// The status is left at the transport default.
    pub fn get_user(&self, req: &HttpRequest) -> HttpResponse {
        let id = user_id_from_path(req.path());
        debug!("Looking up user {:?}", id);
        let user = self.service.find_by_id(id);
        HttpResponse::Ok().json(user)
    }
}

#[get("/{id:.*}")]
pub async fn get_user(handler: web::Data<UserHandler>, req: HttpRequest) -> HttpResponse {
    handler.get_user(&req)
}
