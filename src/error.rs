/// Failure classes surfaced to the operator.
///
/// The kind determines the process exit code:
/// - input/schema problems (bad file or sheet, unknown column, bad eval input) -> 2
/// - data problems (empty sample, violated model preconditions) -> 3
/// - numerical fitting problems -> 4
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The spreadsheet could not be opened or parsed, or the sheet does not exist.
    Load,
    /// A requested column name or index does not resolve.
    ColumnResolution,
    /// The extracted sample is unusable (empty, or fewer rows than parameters).
    Data,
    /// A model precondition on the data is violated (e.g. non-positive y for exp).
    Domain,
    /// The least-squares solve failed or produced non-finite parameters.
    Fit,
    /// Evaluation input could not be parsed as a number.
    InputParse,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Load | ErrorKind::ColumnResolution | ErrorKind::InputParse => 2,
            ErrorKind::Data | ErrorKind::Domain => 3,
            ErrorKind::Fit => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn load(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Load, message)
    }

    pub fn column(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ColumnResolution, message)
    }

    pub fn data(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Data, message)
    }

    pub fn domain(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Domain, message)
    }

    pub fn fit(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Fit, message)
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InputParse, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
