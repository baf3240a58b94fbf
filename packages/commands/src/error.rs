use posterkit_editor::EditError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("unknown argument '{arg}' for operation '{op}'")]
    UnknownArgument { op: String, arg: String },

    #[error("{op}: argument '{arg}' {problem}")]
    BadArgument {
        op: String,
        arg: String,
        problem: String,
    },

    #[error(transparent)]
    Edit(#[from] EditError),
}

impl CommandError {
    /// Stable kind string for failure reports. Grammar-level problems
    /// all surface as argument errors.
    pub fn kind(&self) -> &'static str {
        match self {
            CommandError::Syntax(_)
            | CommandError::UnknownOperation(_)
            | CommandError::UnknownArgument { .. }
            | CommandError::BadArgument { .. } => "ArgumentError",
            CommandError::Edit(err) => err.kind(),
        }
    }
}
