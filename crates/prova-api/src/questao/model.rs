use serde::Deserialize;

/// Body of `POST /questoes`. Every field is required, but each is modeled as
/// `Option` so validation can answer with the full list of missing fields
/// instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateQuestao {
    pub enunciado: Option<String>,
    pub disciplina: Option<String>,
    pub tema: Option<String>,
    pub nivel: Option<String>,
}

/// Body of `PUT /questoes/{id}`. Absent fields keep their stored value; a
/// field that is present is written as given, empty strings included.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateQuestao {
    pub enunciado: Option<String>,
    pub disciplina: Option<String>,
    pub tema: Option<String>,
    pub nivel: Option<String>,
}
