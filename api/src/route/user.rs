use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::user::{
    register_user, show_borrowed_books, show_owned_books, show_pending_books, show_user,
    update_user,
};

pub fn build_user_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(register_user))
        .route("/:username", get(show_user))
        .route("/:username", put(update_user))
        .route("/:username/books", get(show_owned_books))
        .route("/:username/pending-books", get(show_pending_books))
        .route("/:username/borrowed-books", get(show_borrowed_books));

    Router::new().nest("/users", routers)
}
