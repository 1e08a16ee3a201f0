use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The sub process exited with non-success code {}.", describe_exit_code(.0))]
    SubProcessExit(Option<i32>),

    #[error("Error with sub process: {}", _0)]
    SubProcess(#[from] std::io::Error),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Toml {
        action: String,
        file_description: String,
        path: String,
        original: toml::de::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("{} does not exist.", .path)]
    ManifestNotFound { path: String },

    #[error("Unable to change into working directory `{}`: {}", .path, .original)]
    WorkingDirectory {
        path: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(std::io::Error),

    #[error("Clipboard error: {}", .0)]
    Clipboard(String),

    #[error("Invalid selection `{}` for a menu with {} entries", .index, .len)]
    InvalidSelection { index: usize, len: usize },

    #[error("Misc error: {}", .0)]
    Misc(String),
}

fn describe_exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "(terminated by signal)".to_string(),
    }
}

impl Error {
    pub fn toml_error(
        action: String,
        file_description: String,
        path: String,
        original: toml::de::Error,
    ) -> Self {
        Self::Toml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn manifest_not_found(path: String) -> Self {
        Self::ManifestNotFound { path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_process_exit_message_with_code() {
        let error = Error::SubProcessExit(Some(3));
        assert_eq!(
            error.to_string(),
            "The sub process exited with non-success code 3."
        );
    }

    #[test]
    fn test_sub_process_exit_message_without_code() {
        let error = Error::SubProcessExit(None);
        assert!(error.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_manifest_not_found_message() {
        let error = Error::manifest_not_found("/tmp/project/pyproject.toml".to_string());
        assert_eq!(
            error.to_string(),
            "/tmp/project/pyproject.toml does not exist."
        );
    }
}
