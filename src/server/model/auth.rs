use rust_decimal::Decimal;

/// The authenticated caller, resolved from the session's user ID.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthUser {
    pub id: i32,
    pub email: String,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
}

impl From<entity::user::Model> for AuthUser {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            latitude: user.latitude,
            longitude: user.longitude,
        }
    }
}
