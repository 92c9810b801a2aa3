#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required input path or the compiler tool is missing.
    Configuration,
    /// The scene document is not valid JSON or references something that is not there.
    MalformedDocument,
    /// The external compiler could not be started or exited unsuccessfully.
    ToolFailure,
    /// The output document already exists.
    OutputConflict,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }

    pub fn configuration(message: String) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    pub fn malformed(message: String) -> Self {
        Self::new(ErrorKind::MalformedDocument, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

/// Returns the kind of the crate error inside an `anyhow` chain, if there is one.
pub fn kind_of(error: &anyhow::Error) -> Option<ErrorKind> {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<Error>())
        .map(Error::kind)
}
