use async_graphql::extensions::Tracing;
use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, Request, Response, Schema, Value};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::store::RecordStore;

mod loaders;
mod schema;

use schema::{MutationRoot, QueryRoot};

pub const GRAPHQL_PATH: &str = "/graphql";

type FullSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// The executable schema together with the store its resolvers read from.
#[derive(Clone)]
pub struct Library {
    schema: FullSchema,
    store: RecordStore,
}

impl Library {
    pub fn new(store: RecordStore) -> Self {
        let schema = Schema::build(QueryRoot, MutationRoot, EmptySubscription)
            .extension(Tracing)
            .data(store.clone())
            .finish();
        Self { schema, store }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn sdl(&self) -> String {
        self.schema.sdl()
    }

    pub async fn execute(&self, req: impl Into<Request>) -> Response {
        let req = loaders::attach(req.into(), &self.store);
        self.schema.execute(req).await
    }
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

#[axum::debug_handler]
async fn graphql_handler(
    State(library): State<Library>,
    req: GraphQLRequest,
) -> (StatusCode, GraphQLResponse) {
    let res = library.execute(req.into_inner()).await;
    // Documents that fail parsing or validation never reach a resolver and
    // come back without any data.
    let status = if res.is_err() && res.data == Value::Null {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };
    (status, res.into())
}

pub fn make_app(library: Library) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(library)
}
