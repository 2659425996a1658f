use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid command: `{}`", _0)]
    InvalidCommand(String),

    #[error("Incorrect use of command `{}`: {}", .command, .argument)]
    MissingArgument { command: String, argument: String },

    #[error("{} not found!", _0)]
    FileNotFound(String),

    #[error("A file with the name \"{}\" already exists!", _0)]
    FileExists(String),

    #[error("{} variable/value doesn't exist!", _0)]
    VariableNotFound(String),

    #[error("Error {} file at `{}`: {}", .action, .path, .original)]
    Io {
        action: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Unknown response! Response may be \"y\" or \"n\", not \"{}\"", _0)]
    UnknownResponse(String),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("For a color, only one of `rgb`, `ansi` or `name` should be defined.")]
    MultipleColorTypes,

    #[error("Unknown color name: \"{}\"", _0)]
    UnknownColorName(String),

    #[error("Input stream was closed.")]
    InputClosed,

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn missing_argument(command: &str, argument: &str) -> Self {
        Self::MissingArgument {
            command: command.to_string(),
            argument: argument.to_string(),
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(action: &str, path: &str, original: std::io::Error) -> Self {
        Self::Io {
            action: action.to_string(),
            path: path.to_string(),
            original,
        }
    }

    /// Whether the REPL can keep reading commands after reporting this error.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InputClosed | Self::Stdio(_))
    }
}
