use miette::Diagnostic;
use thiserror::Error;

/// Result type for recase operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// Rewriting `original` would overwrite a sibling key named `key`.
    #[error("object already has a {key} property")]
    #[diagnostic(
        code(recase::key_collision),
        help(
            "'{original}' at '{path}' becomes '{key}', which is already taken; rename one of the two keys"
        )
    )]
    KeyCollision {
        key: String,
        original: String,
        path: String,
    },

    #[error("unknown key case '{0}'")]
    #[diagnostic(
        code(recase::unknown_case),
        help("valid cases are: snake, constant, camel, param, header, pascal, dot, notransform")
    )]
    UnknownCase(String),

    #[error("invalid overrides table")]
    #[diagnostic(
        code(recase::overrides),
        help("overrides must be a flat table of string values, e.g. `user_id = \"userID\"`")
    )]
    Overrides(#[source] toml::de::Error),

    #[error("failed to serialize value to JSON")]
    #[diagnostic(code(recase::serialize))]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn key_collision(
        key: impl Into<String>,
        original: impl Into<String>,
        path: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::KeyCollision {
            key: key.into(),
            original: original.into(),
            path: path.into(),
        })
    }
}
