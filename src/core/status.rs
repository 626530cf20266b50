/// Display bucket for a run status
///
/// Only `success` and `failed` are recognized; everything else (running,
/// canceled, skipped, ...) lands in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusClass {
    Success,
    Failed,
    Other,
}

impl StatusClass {
    pub(crate) fn of(status: &str) -> Self {
        match status {
            "success" => StatusClass::Success,
            "failed" => StatusClass::Failed,
            _ => StatusClass::Other,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            StatusClass::Success => "success",
            StatusClass::Failed => "failed",
            StatusClass::Other => "other",
        }
    }

    /// Single-character marker used in status strips
    pub(crate) fn marker(self) -> char {
        match self {
            StatusClass::Success => '✓',
            StatusClass::Failed => '✗',
            StatusClass::Other => '•',
        }
    }
}

/// Class name for a raw status string
pub(crate) fn status_class(status: &str) -> &'static str {
    StatusClass::of(status).as_str()
}
