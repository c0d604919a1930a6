#[derive(thiserror::Error, Debug)]
pub enum SystemError {
    // io errors
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    // env errors
    #[error("Invalid value for {key}: {value:?}")]
    InvalidConfig { key: &'static str, value: String },
}

impl SystemError {
    pub fn invalid_config(key: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidConfig { key, value: value.into() }
    }
}
