//! Books Router

use auth::domain::repository::UserRepository;
use auth::{AuthMiddlewareState, require_auth, require_student, require_teacher};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post, put},
};

use crate::domain::repository::ListingRepository;
use crate::presentation::handlers::{self, BooksAppState};

/// Create the books router
///
/// Mount under `/api/v1/books`. Every route needs a bearer token; the
/// `guard` resolves it against the user store. Paths are served both under
/// their descriptive names and in a REST shape (`/`, `/mine`, `/{id}`).
pub fn books_router<R, A>(state: BooksAppState<R>, guard: AuthMiddlewareState<A>) -> Router
where
    R: ListingRepository + Clone + Send + Sync + 'static,
    A: UserRepository + Clone + Send + Sync + 'static,
{
    let body_limit = state.config.upload_body_limit();
    let student = || middleware::from_fn(require_student);
    let teacher = || middleware::from_fn(require_teacher);

    Router::new()
        // Any authenticated role
        .route("/get-all-books", get(handlers::list_all::<R>))
        .route("/", get(handlers::list_all::<R>))
        .route("/get-books/{id}", get(handlers::get_book::<R>))
        .route("/{id}", get(handlers::get_book::<R>))
        // Students manage their own listings
        .route("/my-books", get(handlers::list_mine::<R>).route_layer(student()))
        .route("/mine", get(handlers::list_mine::<R>).route_layer(student()))
        .route(
            "/add-books",
            post(handlers::create_book::<R>)
                .route_layer(student())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .route(
            "/",
            post(handlers::create_book::<R>)
                .route_layer(student())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .route(
            "/edit-books/{id}",
            put(handlers::update_book::<R>)
                .route_layer(student())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .route(
            "/{id}",
            put(handlers::update_book::<R>)
                .route_layer(student())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .route(
            "/delete/{id}",
            delete(handlers::delete_book::<R>).route_layer(student()),
        )
        .route("/{id}", delete(handlers::delete_book::<R>).route_layer(student()))
        // Teacher moderation
        .route(
            "/admin/get-books/{id}",
            post(handlers::get_book::<R>).route_layer(teacher()),
        )
        .route(
            "/admin/status/{id}",
            put(handlers::moderate_book::<R>).route_layer(teacher()),
        )
        .route_layer(middleware::from_fn_with_state(guard, require_auth::<A>))
        .with_state(state)
}
