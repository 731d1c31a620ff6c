#[derive(Debug, Clone)]
pub struct RegisterCardDto {
    pub dmc: String,
    pub familia: String,
    pub linea: String,
}
