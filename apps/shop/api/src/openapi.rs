use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Shop API",
        version = "0.1.0",
        description = "Product catalogue and user accounts"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/products", api = domain_products::ApiDoc),
        (path = "/users", api = domain_users::ApiDoc)
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_paths_are_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in ["/products/{id}", "/users/{id}"] {
            assert!(paths.contains(&expected), "missing {expected} in {paths:?}");
        }
    }

    #[test]
    fn test_error_body_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.schemas.contains_key("ErrorResponse"));
    }
}
