use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("dom: {0}")]
    Dom(String),
    #[error("storage: {0}")]
    Storage(String),
    #[error("audio: {0}")]
    Audio(String),
    #[error("serialize: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Renders a thrown JS value for logging; `JsValue` itself is not `Send`/`Error`.
pub fn describe_js(v: &JsValue) -> String {
    v.as_string().unwrap_or_else(|| format!("{:?}", v))
}

impl GameError {
    pub fn dom(v: JsValue) -> Self {
        GameError::Dom(describe_js(&v))
    }

    pub fn storage(v: JsValue) -> Self {
        GameError::Storage(describe_js(&v))
    }

    pub fn audio(v: JsValue) -> Self {
        GameError::Audio(describe_js(&v))
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
