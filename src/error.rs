/// A value raised inside a generator body, either injected by the caller
/// through `Generator::inject_error` or raised by the body itself.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct Exception {
    message: String,
}

impl Exception {
    pub fn new(message: impl Into<String>) -> Self {
        Exception { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for Exception {
    fn from(message: &str) -> Self {
        Exception::new(message)
    }
}

impl From<String> for Exception {
    fn from(message: String) -> Self {
        Exception::new(message)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid generator state at {method} {file}:{line}: {message}")]
    InvalidState {
        message: String,
        file: String,
        line: usize,
        method: String,
    },

    #[error("Generator is already running")]
    AlreadyRunning,

    #[error("Uncaught exception: {0}")]
    Uncaught(#[from] Exception),
}

impl GeneratorError {
    /// The exception carried by an `Uncaught` error, if any.
    pub fn exception(&self) -> Option<&Exception> {
        match self {
            GeneratorError::Uncaught(e) => Some(e),
            _ => None,
        }
    }
}

macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        // remove the trailing "::f"
        &name[..name.len() - 3]
    }};
}

// Macro that constructs an InvalidState error using the compile-time caller
// location. Using a macro (rather than a function) ensures `file!()` and
// `line!()` expand to the site where the macro is invoked.
macro_rules! invalid_state_here {
    ($msg:expr) => {
        $crate::error::GeneratorError::InvalidState {
            message: $msg.to_string(),
            file: file!().to_string(),
            line: line!() as usize,
            method: $crate::error::function_name!().to_string(),
        }
    };
}

pub(crate) use function_name;
pub(crate) use invalid_state_here;
