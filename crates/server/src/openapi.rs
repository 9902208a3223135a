use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// A persisted person.
#[derive(ToSchema)]
pub struct PersonDoc {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

/// Request body for create/update; `id` is ignored.
#[derive(ToSchema)]
pub struct PersonInputDoc {
    pub id: Option<i32>,
    pub name: String,
    pub age: i32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::persons::list,
        crate::routes::persons::get,
        crate::routes::persons::search,
        crate::routes::persons::create,
        crate::routes::persons::update,
        crate::routes::persons::delete,
    ),
    components(schemas(HealthResponse, PersonDoc, PersonInputDoc)),
    tags((name = "health"), (name = "persons"))
)]
pub struct ApiDoc;
