use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenError {
    #[error("editor command is empty")]
    EmptyEditorCommand,

    #[error("failed to launch editor '{program}': {source}")]
    Launch {
        program: String,
        source: std::io::Error,
    },

    #[error("editor '{program}' exited with {status}")]
    EditorFailed {
        program: String,
        status: std::process::ExitStatus,
    },

    #[error("failed to write output: {0}")]
    Output(String),
}

impl OpenError {
    pub fn launch(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::Launch {
            program: program.into(),
            source,
        }
    }
}
