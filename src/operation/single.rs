//! The operation subtype with a method and a parameter list: conversions,
//! transformations and point motion operations all share this shape.

use crate::internal::*;

/// A method identity, an ordered list of parameter values, and the common
/// base material
#[derive(Clone, Debug, PartialEq)]
pub struct SingleOperation {
    pub base: OperationBase,
    pub method: OperationMethod,
    pub values: Vec<GeneralParameterValue>,
}

impl SingleOperation {
    /// Constructing a single operation checks one structural invariant
    /// immediately: the number of values must match the number of
    /// parameters the method declares. Everything subtler (units, names,
    /// completeness against the registry) is the business of
    /// [`SingleOperation::validate_parameters`], which diagnoses rather
    /// than rejects.
    pub fn new(
        base: OperationBase,
        method: OperationMethod,
        values: Vec<GeneralParameterValue>,
    ) -> Result<SingleOperation, Error> {
        if !method.parameters.is_empty() && method.parameters.len() != values.len() {
            return Err(Error::InvalidOperation(format!(
                "'{}': {} parameters declared, {} values given",
                method.name,
                method.parameters.len(),
                values.len()
            )));
        }
        Ok(SingleOperation {
            base,
            method,
            values,
        })
    }

    /// Locate a parameter value: (1) exact nonzero-code match, (2) exact
    /// name match, (3) tolerant name match. Groups are searched too, but
    /// flat lookups take precedence. Absence is an `Option`, not an error:
    /// a caller probing for an optional parameter is the normal case.
    pub fn parameter_value(&self, name: &str, code: u32) -> Option<&ParameterValue> {
        if code != 0 {
            if let Some(v) = self.singles().find(|v| v.parameter.code == code) {
                return Some(&v.value);
            }
        }
        if let Some(v) = self.singles().find(|v| v.parameter.name == name) {
            return Some(&v.value);
        }
        self.singles()
            .find(|v| is_equivalent_name(&v.parameter.name, name))
            .map(|v| &v.value)
    }

    /// The parameter's measure, if present and a measure
    pub fn measure(&self, name: &str, code: u32) -> Option<&Measure> {
        self.parameter_value(name, code)?.as_measure()
    }

    /// All grid filenames the operation refers to, in declaration order
    pub fn grid_filenames(&self) -> Vec<&str> {
        self.singles()
            .filter_map(|v| v.value.as_filename())
            .collect()
    }

    /// Every single parameter value, flattened: groups contribute their
    /// members in order
    pub(crate) fn singles(&self) -> impl Iterator<Item = &OperationParameterValue> {
        self.values.iter().flat_map(|v| match v {
            GeneralParameterValue::Single(v) => std::slice::from_ref(v).iter(),
            GeneralParameterValue::Group(_, members) => members.iter(),
        })
    }

    /// Diagnose the parameter list against the registry's declaration of
    /// the method. Returns human-readable complaints; an empty vector means
    /// the operation validates. An unknown method yields a single complaint
    /// naming the method, never an error.
    pub fn validate_parameters(&self, registry: &MethodRegistry) -> Vec<String> {
        let Some(mapping) = registry.find_method(self.method.code, &self.method.name) else {
            return vec![format!("unknown method '{}'", self.method.name)];
        };

        let mut complaints = Vec::new();

        // Every declared parameter must be filled in...
        for param in mapping.params {
            let Some(value) = self.parameter_value(param.name, param.code) else {
                complaints.push(format!("missing parameter '{}'", param.name));
                continue;
            };
            // ...with a value of the declared unit class
            match value {
                ParameterValue::Measure(m) => {
                    let given = m.unit().unit_type;
                    if given != param.unit_type && param.unit_type != UnitType::None {
                        complaints.push(format!(
                            "parameter '{}': expected a {:?} unit, got {:?}",
                            param.name, param.unit_type, given
                        ));
                    }
                }
                ParameterValue::Filename(f) => {
                    if f.is_empty() {
                        complaints.push(format!("parameter '{}': empty filename", param.name));
                    }
                }
                ParameterValue::Integer(_) => (),
            }
        }

        // ...and nothing beyond the declaration may be present
        for value in self.singles() {
            if mapping
                .find_param(value.parameter.code, &value.parameter.name)
                .is_none()
            {
                complaints.push(format!(
                    "parameter '{}' does not belong to method '{}'",
                    value.parameter.name, mapping.name
                ));
            }
        }

        complaints
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::authoring::*;

    fn helmert_values(x: f64, y: f64, z: f64) -> Vec<GeneralParameterValue> {
        [
            ("X-axis translation", 8605, x),
            ("Y-axis translation", 8606, y),
            ("Z-axis translation", 8607, z),
        ]
        .iter()
        .map(|(name, code, v)| {
            GeneralParameterValue::Single(OperationParameterValue::measure(
                name,
                *code,
                Measure::new(*v, units::METRE),
            ))
        })
        .collect()
    }

    #[test]
    fn count_mismatch_is_rejected() {
        let reg = MethodRegistry::with_builtins();
        let method = OperationMethod::from_mapping(reg.find_method(9603, "").unwrap());
        let mut values = helmert_values(84.87, 96.49, 116.95);
        values.pop();

        let base = OperationBase::new("ED50 to WGS 84 (broken)");
        assert!(matches!(
            SingleOperation::new(base, method, values),
            Err(Error::InvalidOperation(_))
        ));
    }

    #[test]
    fn parameter_lookup() -> Result<(), Error> {
        let reg = MethodRegistry::with_builtins();
        let method = OperationMethod::from_mapping(reg.find_method(9603, "").unwrap());
        let op = SingleOperation::new(
            OperationBase::new("ED50 to WGS 84 (14)"),
            method,
            helmert_values(-84.87, -96.49, -116.95),
        )?;

        // By code, by exact name, by tolerant name
        assert_eq!(op.measure("", 8606).unwrap().value(), -96.49);
        assert_eq!(op.measure("Y-axis translation", 0).unwrap().value(), -96.49);
        assert_eq!(op.measure("y axis translation", 0).unwrap().value(), -96.49);

        // Absence is an Option, not an error
        assert!(op.parameter_value("Scale difference", 8611).is_none());
        Ok(())
    }

    #[test]
    fn validation_diagnoses_rather_than_rejects() -> Result<(), Error> {
        let reg = MethodRegistry::with_builtins();
        let method = OperationMethod::from_mapping(reg.find_method(9603, "").unwrap());

        // Wrong unit class on the Z translation
        let mut values = helmert_values(-84.87, -96.49, 0.0);
        values[2] = GeneralParameterValue::Single(OperationParameterValue::measure(
            "Z-axis translation",
            8607,
            Measure::new(-116.95, units::ARC_SECOND),
        ));
        let op = SingleOperation::new(OperationBase::new("dubious"), method, values)?;

        let complaints = op.validate_parameters(&reg);
        assert_eq!(complaints.len(), 1);
        assert!(complaints[0].contains("Z-axis translation"));

        // An unknown method is a diagnostic, not an error
        let odd = SingleOperation::new(
            OperationBase::new("odd"),
            OperationMethod::new("flat earth transformation", 0, Vec::new()),
            Vec::new(),
        )?;
        assert_eq!(odd.validate_parameters(&reg).len(), 1);
        Ok(())
    }
}
