use thiserror::Error;

/// Why a parameter set was rejected at construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamError {
    /// A field has the wrong primitive kind or the input is malformed.
    #[error("type error: {message}")]
    Type { message: String },

    /// A single field violates a simple bound.
    #[error("'{field}' = {value}: {requirement}")]
    Range {
        field: &'static str,
        value: String,
        requirement: &'static str,
    },

    /// A cross-field inequality failed. `inputs` holds every value it used.
    #[error("{check}: {reason}{}", fmt_inputs(.inputs))]
    Consistency {
        check: &'static str,
        reason: &'static str,
        inputs: Vec<(&'static str, f64)>,
    },
}

impl ParamError {
    pub(crate) fn range(field: &'static str, value: impl ToString, requirement: &'static str) -> Self {
        ParamError::Range {
            field,
            value: value.to_string(),
            requirement,
        }
    }

    pub(crate) fn consistency(
        check: &'static str,
        reason: &'static str,
        inputs: &[(&'static str, f64)],
    ) -> Self {
        ParamError::Consistency {
            check,
            reason,
            inputs: inputs.to_vec(),
        }
    }

    /// Name of the failed consistency check, if any.
    pub fn check(&self) -> Option<&'static str> {
        match self {
            ParamError::Consistency { check, .. } => Some(check),
            _ => None,
        }
    }

    /// Field named by a range error, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ParamError::Range { field, .. } => Some(field),
            _ => None,
        }
    }
}

fn fmt_inputs(inputs: &[(&'static str, f64)]) -> String {
    let mut out = String::new();
    for (name, value) in inputs {
        out.push_str(&format!("\n  {name}: {value}"));
    }
    out
}
