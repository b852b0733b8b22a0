use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CityInputDoc { pub name: String }

#[derive(ToSchema)]
pub struct CityDoc { pub id: i64, pub name: String }

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct EventDoc {
    pub id: i64,
    pub name: String,
    #[schema(example = "2021-05-18")]
    pub date: String,
    pub url: String,
    pub cityId: i64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::cities::find_all,
        crate::routes::cities::insert,
        crate::routes::cities::delete,
        crate::routes::events::update,
    ),
    components(
        schemas(
            HealthResponse,
            CityInputDoc,
            CityDoc,
            EventDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "cities"),
        (name = "events")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in ["/health", "/cities", "/cities/{id}", "/events/{id}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
