use serde::Deserialize;

/// Body of `POST /usuarios`. All fields required; modeled as `Option` so the
/// 400 response can name every missing field at once.
#[derive(Debug, Deserialize)]
pub struct CreateUsuario {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
}

/// Body of `PUT /usuarios/{id}`. Absent fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUsuario {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
}
