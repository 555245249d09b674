use thiserror::Error;

/// Failure modes of the interactive flow.
///
/// An invalid custom DNS address is deliberately not represented here; it is
/// recovered at the prompt by re-prompting and never reaches a caller.
#[derive(Debug, Error)]
pub enum FastDnsError {
    /// The underlying OS command returned a non-zero status or wrote to stderr.
    #[error("command `{command}` failed: {output}")]
    CommandExecutionFailed { command: String, output: String },

    /// The service listing succeeded but contained no parseable entries.
    #[error("no network services found on this system")]
    NoServicesFound,

    /// The multi-select step returned an empty selection.
    #[error("at least one network service must be selected")]
    SelectionRequired,

    /// The user interrupted an interactive prompt. Treated as a normal
    /// termination path, not a failure.
    #[error("cancelled by user")]
    UserCancelled,

    /// The interactive toolkit failed for a reason other than an interrupt,
    /// e.g. a closed or non-interactive terminal.
    #[error("prompt failed: {0}")]
    PromptFailed(#[from] dialoguer::Error),
}

impl FastDnsError {
    /// Whether this error represents a user-driven abort rather than a fault.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, FastDnsError::UserCancelled)
    }
}
