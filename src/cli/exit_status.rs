use std::process::ExitCode;

/// Exit status of a run.
///
/// - `Success` (0): Report printed, no forced failure
/// - `Error` (1): Configuration or resource error, nothing reported
/// - `MissingKeys` (2): Report printed, missing keys found with `--fail-on-missing`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Report printed, no forced failure.
    Success,
    /// Configuration error, missing base file, unmatched locales or unreadable resource.
    Error,
    /// Missing keys were found and the caller asked to fail on them.
    MissingKeys,
}

impl ExitStatus {
    pub fn from_missing(total_missing: usize, fail_on_missing: bool) -> Self {
        if fail_on_missing && total_missing > 0 {
            ExitStatus::MissingKeys
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
            ExitStatus::MissingKeys => ExitCode::from(2),
        }
    }
}
