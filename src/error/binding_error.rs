#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents the ways a `name=value` variable binding can be malformed.
pub enum BindingError {
    /// The binding had no `=` separator.
    MissingSeparator {
        /// The raw binding text.
        binding: String,
    },
    /// The name was not a single alphabetic character.
    InvalidName {
        /// The name as written.
        name: String,
    },
    /// The value was not a finite number.
    InvalidValue {
        /// The value as written.
        value: String,
    },
}

impl std::fmt::Display for BindingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSeparator { binding } => {
                write!(f, "Invalid binding '{binding}': expected the form name=value.")
            },
            Self::InvalidName { name } => write!(f,
                                                 "Invalid variable name '{name}': names are a single letter."),
            Self::InvalidValue { value } => {
                write!(f, "Invalid variable value '{value}': expected a finite number.")
            },
        }
    }
}

impl std::error::Error for BindingError {}
