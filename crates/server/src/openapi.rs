use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorResponse { pub error: String }

#[derive(ToSchema)]
pub struct CreateUserDoc {
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(ToSchema)]
pub struct RegisterRequestDoc { pub user: CreateUserDoc }

#[derive(ToSchema)]
pub struct LoginRequestDoc { pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct UserDoc {
    pub id: i64,
    pub name: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// One of `active`, `deleted`, `banned`.
    pub status: Option<String>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(ToSchema)]
pub struct AuthResponseDoc { pub user: UserDoc, pub token: String }

#[derive(ToSchema)]
pub struct UpdateUserDoc {
    pub name: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(ToSchema)]
pub struct BookingDoc {
    pub id: i64,
    pub bicycle_id: i64,
    pub station_id: i64,
    pub payment_id: i64,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub expires_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(ToSchema)]
pub struct RentalDoc {
    pub id: i64,
    pub bicycle_id: i64,
    pub station_start_id: i64,
    pub station_end_id: i64,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
    pub total_cost: f64,
}

#[derive(ToSchema)]
pub struct PaymentDoc {
    pub id: i64,
    pub method: String,
    pub amount: f64,
    pub transaction_id: Option<String>,
    pub status: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(ToSchema)]
pub struct UserProfileDoc {
    pub user: UserDoc,
    pub bookings: Vec<BookingDoc>,
    pub rentals: Vec<RentalDoc>,
    pub payments: Vec<PaymentDoc>,
}

#[derive(ToSchema)]
pub struct StationDoc {
    pub id: i64,
    pub location_street: String,
    pub bikes_available: i32,
    pub bikes_total: i32,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(ToSchema)]
pub struct StationLocationDoc { pub location_street: String }

#[derive(ToSchema)]
pub struct BikeDeltaDoc { pub delta: i32 }

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::users::me,
        crate::routes::users::update_me,
        crate::routes::users::delete_me,
        crate::routes::stations::create,
        crate::routes::stations::get,
        crate::routes::stations::update_location,
        crate::routes::stations::delete,
        crate::routes::stations::bikes_available,
        crate::routes::stations::bikes_total,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            CreateUserDoc,
            RegisterRequestDoc,
            LoginRequestDoc,
            UserDoc,
            AuthResponseDoc,
            UpdateUserDoc,
            BookingDoc,
            RentalDoc,
            PaymentDoc,
            UserProfileDoc,
            StationDoc,
            StationLocationDoc,
            BikeDeltaDoc,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "users"),
        (name = "stations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/auth/register",
            "/auth/login",
            "/users/me",
            "/stations",
            "/stations/{id}",
            "/stations/{id}/location",
            "/stations/{id}/bikes-available",
            "/stations/{id}/bikes-total",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json["components"]["securitySchemes"]["bearer_auth"].is_object());
    }
}
