pub type KustpatchResult<T> = Result<T, KustpatchError>;

#[derive(thiserror::Error, Debug)]
pub enum KustpatchError {
    #[error("{path} accessor error: {found} is of the type {kind}, expected mapping")]
    FieldRead {
        path: String,
        found: String,
        kind: &'static str,
    },
    #[error("value cannot be set because {path} is not a mapping")]
    FieldWrite { path: String },
    #[error("Cannot use an empty field path")]
    EmptyPath,
    #[error("StdError: {0}")]
    StdError(#[from] std::io::Error),
    #[error("Utf8Error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
    #[error("Cannot serialize/deserialize JSON. Reason: {0}")]
    JSONError(#[from] serde_json::Error),
    #[error("Cannot serialize/deserialize YAML. Reason: {0}")]
    YAMLError(#[from] serde_yaml::Error),
}
