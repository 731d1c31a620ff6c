#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub nombre: String,
    pub password_hash: String,
    pub role_id: i32,
}
