use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::book::{delete_book, register_book, show_book, show_book_list, update_book};
use crate::handler::lending::{
    accept_request, confirm_pickup, confirm_return, request_book, show_request_list,
};

pub fn build_book_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(register_book))
        .route("/", get(show_book_list))
        .route("/:book_id", get(show_book))
        .route("/:book_id", put(update_book))
        .route("/:book_id", delete(delete_book))
        .route("/:book_id/requests", post(request_book))
        .route("/:book_id/requests", get(show_request_list))
        .route("/:book_id/requests/:request_id/accept", put(accept_request))
        .route("/:book_id/requests/:request_id/pickup", put(confirm_pickup))
        .route("/:book_id/return", put(confirm_return));

    Router::new().nest("/books", routers)
}
