//! Errors raised by the CI-provider hooks.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatusError {
    /// The project has no CI provider able to answer this hook.
    #[error("{hook} is not implemented for projects without a CI provider")]
    NotImplemented { hook: &'static str },

    #[error("{provider} project is missing `{field}`")]
    MissingField {
        provider: &'static str,
        field: &'static str,
    },

    #[error("status sequence exhausted for project {project}")]
    SequenceExhausted { project: String },
}
