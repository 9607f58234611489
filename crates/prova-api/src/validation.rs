use crate::error::ApiError;

/// Check that every named required field is present and non-empty.
///
/// Collects every violation instead of stopping at the first, so a 400
/// response names all the fields the client still has to supply.
pub fn require_fields(fields: &[(&'static str, Option<&str>)]) -> Result<(), ApiError> {
    let campos: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.is_none_or(|v| v.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect();

    if campos.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation { campos })
    }
}
