use std::fmt::{ Display, Formatter };

#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    Unavailable(String),
    IO(String),
    Serialization(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage Unavailable: {}", msg),
            StorageError::IO(msg) => write!(f, "I/O Error: {}", msg),
            StorageError::Serialization(msg) => write!(f, "Serialization Error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(error: std::io::Error) -> Self {
        StorageError::IO(error.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        StorageError::Serialization(error.to_string())
    }
}

impl From<wasm_bindgen::JsValue> for StorageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        StorageError::Unavailable(format!("{:?}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_keep_their_message() {
        let err: StorageError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err, StorageError::IO("gone".to_string()));
        assert_eq!(err.to_string(), "I/O Error: gone");
    }

    #[test]
    fn json_errors_map_to_serialization() {
        let err: StorageError = serde_json::from_str::<u8>("nope").unwrap_err().into();
        assert!(matches!(err, StorageError::Serialization(_)));
    }
}
