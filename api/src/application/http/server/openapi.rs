use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::application::http::{
    allergen::router::AllergenApiDoc,
    allergy_profile::router::AllergyProfileApiDoc,
    health::__path_health,
    scan::router::{HistoryApiDoc, ScanApiDoc},
};

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AllerScan API",
        description = "Checks ingredient lists against a user's allergy profile"
    ),
    paths(health),
    modifiers(&BearerAuth),
    nest(
        (path = "/allergens", api = AllergenApiDoc),
        (path = "/profile", api = AllergyProfileApiDoc),
        (path = "/scan", api = ScanApiDoc),
        (path = "/history", api = HistoryApiDoc),
    )
)]
pub struct ApiDoc;
