use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::photograph::{delete_photograph, show_photograph, upload_photograph};

pub fn build_photograph_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(upload_photograph))
        .route("/:photograph_id", get(show_photograph))
        .route("/:photograph_id", delete(delete_photograph));

    Router::new().nest("/photographs", routers)
}
