use chrono::NaiveDate;

/// An application user (`usuarios` row)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub nombre: String,
    /// bcrypt hash, never the plain password
    pub password_hash: String,
    pub fecha_creacion: NaiveDate,
    pub role_id: i32,
}
