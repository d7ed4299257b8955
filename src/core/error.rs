use std::fmt;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum TransformErrorKind {
    Error,
    Warning,
}

#[derive(Debug, PartialEq, Clone)]
pub struct TransformError {
    pub kind: TransformErrorKind,
    pub msg: String,
}

impl TransformError {
    pub fn error(msg: &str) -> Self {
        TransformError {
            kind: TransformErrorKind::Error,
            msg: String::from(msg),
        }
    }

    pub fn warning(msg: &str) -> Self {
        TransformError {
            kind: TransformErrorKind::Warning,
            msg: String::from(msg),
        }
    }

    pub fn is_warning(&self) -> bool {
        self.kind == TransformErrorKind::Warning
    }
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TransformErrorKind::Error => write!(f, "Error: {}", self.msg),
            TransformErrorKind::Warning => write!(f, "Warning: {}", self.msg),
        }
    }
}

impl std::error::Error for TransformError {}

impl From<std::io::Error> for TransformError {
    fn from(value: std::io::Error) -> Self {
        let msg = value.to_string();
        return TransformError::error(&msg);
    }
}

impl From<serde_json::Error> for TransformError {
    fn from(value: serde_json::Error) -> Self {
        let msg = value.to_string();
        return TransformError::error(&msg);
    }
}
