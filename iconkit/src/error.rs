use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("logo not found at {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to decode logo{}", path_suffix(.path))]
    Decode {
        path: Option<PathBuf>,
        #[source]
        source: image::ImageError,
    },
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to encode icon")]
    Encode(#[source] image::ImageError),
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" at {}", path.display()),
        None => String::new(),
    }
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}
