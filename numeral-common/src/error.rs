use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumeralCommonError {
    #[error("JSON error: `{0}`")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON object for settings, found: `{0}`")]
    SettingsNotAnObject(String),
}
