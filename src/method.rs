//! The abstract operation model: methods, parameters and parameter values.
//!
//! An [`OperationMethod`] is a *description* of an algorithm - a name, a
//! registry code and an ordered parameter declaration - not the algorithm
//! itself. The pipeline compiler is where descriptions turn executable.

use crate::internal::*;
use crate::operation::equivalence::Criterion;

/// A declared parameter of a method: name plus registry code.
/// A code of 0 means "no registry identity, match by name only".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationParameter {
    pub name: String,
    pub code: u32,
}

impl OperationParameter {
    pub fn new(name: &str, code: u32) -> OperationParameter {
        OperationParameter {
            name: name.to_string(),
            code,
        }
    }

    /// Two parameter declarations refer to the same parameter if their
    /// nonzero codes agree, or failing that, their names do (tolerantly)
    pub fn is_equivalent_to(&self, other: &OperationParameter) -> bool {
        if self.code != 0 && other.code != 0 {
            return self.code == other.code;
        }
        is_equivalent_name(&self.name, &other.name)
    }
}

/// A method identity with its ordered parameter declarations
#[derive(Clone, Debug, PartialEq)]
pub struct OperationMethod {
    pub name: String,
    pub code: u32,
    pub parameters: Vec<OperationParameter>,
}

impl OperationMethod {
    pub fn new(name: &str, code: u32, parameters: Vec<OperationParameter>) -> OperationMethod {
        OperationMethod {
            name: name.to_string(),
            code,
            parameters,
        }
    }

    /// Instantiate a method from a registry mapping, parameter declarations
    /// and all
    pub fn from_mapping(mapping: &MethodMapping) -> OperationMethod {
        OperationMethod {
            name: mapping.name.to_string(),
            code: mapping.code,
            parameters: mapping
                .params
                .iter()
                .map(|p| OperationParameter::new(p.name, p.code))
                .collect(),
        }
    }

    /// Method identity under the given criterion.
    ///
    /// Agreeing nonzero codes settle it under either criterion. Failing
    /// that, Strict wants the names verbatim, while Equivalent folds case
    /// and punctuation. Cross-method pairs the engine knows to be
    /// mathematically interchangeable (Position Vector vs. Coordinate
    /// Frame, etc.) are the business of the operation-level comparison,
    /// which sees the parameter values too - not of this method-level one.
    pub fn is_equivalent_to(&self, other: &OperationMethod, criterion: Criterion) -> bool {
        if self.code != 0 && other.code != 0 && self.code == other.code {
            return true;
        }
        match criterion {
            Criterion::Strict => self.name == other.name,
            Criterion::Equivalent => is_equivalent_name(&self.name, &other.name),
        }
    }
}

/// The value of one parameter: a measure (value with unit), a filename
/// (grid-based methods), or a bare integer
#[derive(Clone, Debug, PartialEq)]
pub enum ParameterValue {
    Measure(Measure),
    Filename(String),
    Integer(i64),
}

impl ParameterValue {
    pub fn as_measure(&self) -> Option<&Measure> {
        match self {
            ParameterValue::Measure(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_filename(&self) -> Option<&str> {
        match self {
            ParameterValue::Filename(f) => Some(f),
            _ => None,
        }
    }

    /// Value identity under the given criterion. Strict compares measures
    /// bitwise, unit and all; Equivalent compares in SI at relative 1e-10.
    /// Filenames and integers compare exactly under either criterion.
    pub fn is_equivalent_to(&self, other: &ParameterValue, criterion: Criterion) -> bool {
        match (self, other) {
            (ParameterValue::Measure(a), ParameterValue::Measure(b)) => match criterion {
                Criterion::Strict => a == b,
                Criterion::Equivalent => a.is_equivalent_to(b),
            },
            (ParameterValue::Filename(a), ParameterValue::Filename(b)) => a == b,
            (ParameterValue::Integer(a), ParameterValue::Integer(b)) => a == b,
            _ => false,
        }
    }
}

/// A parameter paired with its value
#[derive(Clone, Debug, PartialEq)]
pub struct OperationParameterValue {
    pub parameter: OperationParameter,
    pub value: ParameterValue,
}

impl OperationParameterValue {
    pub fn new(parameter: OperationParameter, value: ParameterValue) -> OperationParameterValue {
        OperationParameterValue { parameter, value }
    }

    /// Shorthand for the overwhelmingly common case
    pub fn measure(name: &str, code: u32, value: Measure) -> OperationParameterValue {
        OperationParameterValue {
            parameter: OperationParameter::new(name, code),
            value: ParameterValue::Measure(value),
        }
    }

    pub fn filename(name: &str, code: u32, file: &str) -> OperationParameterValue {
        OperationParameterValue {
            parameter: OperationParameter::new(name, code),
            value: ParameterValue::Filename(file.to_string()),
        }
    }
}

/// Either a single parameter value, or a named group of them. Groups compare
/// strictly member-by-member under either criterion.
#[derive(Clone, Debug, PartialEq)]
pub enum GeneralParameterValue {
    Single(OperationParameterValue),
    Group(String, Vec<OperationParameterValue>),
}

impl GeneralParameterValue {
    pub fn as_single(&self) -> Option<&OperationParameterValue> {
        match self {
            GeneralParameterValue::Single(v) => Some(v),
            GeneralParameterValue::Group(..) => None,
        }
    }
}

// ----- T E S T S ---------------------------------------------------------------------
