//! Planting area dimensions
//!
//! Each shape carries exactly the measurements it needs, so a rectangle can
//! never be missing its height and a square can never grow a base.

use std::fmt;

use thiserror::Error;

use super::catalog::GeometryKind;

#[derive(Debug, Error, PartialEq)]
pub enum DimensionError {
    #[error("{kind} needs {expected} measurement(s), got {got}")]
    WrongArity {
        kind: GeometryKind,
        expected: usize,
        got: usize,
    },

    #[error("{field} is not a measurement of {kind}")]
    UnknownField { kind: GeometryKind, field: DimensionField },

    #[error("Expected {expected} dimensions, got {got}")]
    KindMismatch {
        expected: GeometryKind,
        got: GeometryKind,
    },
}

/// A single named measurement, in meters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionField {
    Base,
    Height,
    Side,
}

impl DimensionField {
    pub fn label(&self) -> &'static str {
        match self {
            DimensionField::Base => "Base",
            DimensionField::Height => "Altura",
            DimensionField::Side => "Lado",
        }
    }
}

impl fmt::Display for DimensionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw measurements of a planting area, tagged by shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimensions {
    Rectangle { base: f64, height: f64 },
    Triangle { base: f64, height: f64 },
    Square { side: f64 },
}

impl Dimensions {
    /// Builds dimensions for a shape from values given in [`GeometryKind::fields`] order
    pub fn from_values(kind: GeometryKind, values: &[f64]) -> Result<Self, DimensionError> {
        let expected = kind.fields().len();
        match (kind, values) {
            (GeometryKind::Rectangle, &[base, height]) => Ok(Dimensions::Rectangle { base, height }),
            (GeometryKind::Triangle, &[base, height]) => Ok(Dimensions::Triangle { base, height }),
            (GeometryKind::Square, &[side]) => Ok(Dimensions::Square { side }),
            _ => Err(DimensionError::WrongArity {
                kind,
                expected,
                got: values.len(),
            }),
        }
    }

    /// Returns the shape these dimensions describe
    pub fn kind(&self) -> GeometryKind {
        match self {
            Dimensions::Rectangle { .. } => GeometryKind::Rectangle,
            Dimensions::Triangle { .. } => GeometryKind::Triangle,
            Dimensions::Square { .. } => GeometryKind::Square,
        }
    }

    /// Returns the value of one measurement, if the shape has it
    pub fn get(&self, field: DimensionField) -> Option<f64> {
        match (self, field) {
            (Dimensions::Rectangle { base, .. }, DimensionField::Base)
            | (Dimensions::Triangle { base, .. }, DimensionField::Base) => Some(*base),
            (Dimensions::Rectangle { height, .. }, DimensionField::Height)
            | (Dimensions::Triangle { height, .. }, DimensionField::Height) => Some(*height),
            (Dimensions::Square { side }, DimensionField::Side) => Some(*side),
            _ => None,
        }
    }

    /// Returns a copy with one measurement replaced
    pub fn with(self, field: DimensionField, value: f64) -> Result<Self, DimensionError> {
        match (self, field) {
            (Dimensions::Rectangle { height, .. }, DimensionField::Base) => {
                Ok(Dimensions::Rectangle { base: value, height })
            }
            (Dimensions::Rectangle { base, .. }, DimensionField::Height) => {
                Ok(Dimensions::Rectangle { base, height: value })
            }
            (Dimensions::Triangle { height, .. }, DimensionField::Base) => {
                Ok(Dimensions::Triangle { base: value, height })
            }
            (Dimensions::Triangle { base, .. }, DimensionField::Height) => {
                Ok(Dimensions::Triangle { base, height: value })
            }
            (Dimensions::Square { .. }, DimensionField::Side) => Ok(Dimensions::Square { side: value }),
            (dims, field) => Err(DimensionError::UnknownField {
                kind: dims.kind(),
                field,
            }),
        }
    }

    /// Iterates `(field, value)` pairs in prompt order
    pub fn fields(&self) -> impl Iterator<Item = (DimensionField, f64)> + '_ {
        self.kind()
            .fields()
            .iter()
            .filter_map(move |field| self.get(*field).map(|value| (*field, value)))
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields()
            .map(|(field, value)| format!("{} = {}m", field, value))
            .collect();
        write!(f, "{}: {}", self.kind(), parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_values_matches_shape() {
        let rect = Dimensions::from_values(GeometryKind::Rectangle, &[100.0, 50.0]).unwrap();
        assert_eq!(rect, Dimensions::Rectangle { base: 100.0, height: 50.0 });

        let square = Dimensions::from_values(GeometryKind::Square, &[50.0]).unwrap();
        assert_eq!(square, Dimensions::Square { side: 50.0 });
    }

    #[test]
    fn from_values_rejects_wrong_arity() {
        let err = Dimensions::from_values(GeometryKind::Square, &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            DimensionError::WrongArity {
                kind: GeometryKind::Square,
                expected: 1,
                got: 2,
            }
        );
        assert!(Dimensions::from_values(GeometryKind::Triangle, &[1.0]).is_err());
    }

    #[test]
    fn replace_single_field() {
        let tri = Dimensions::Triangle { base: 10.0, height: 4.0 };
        let updated = tri.with(DimensionField::Height, 8.0).unwrap();
        assert_eq!(updated, Dimensions::Triangle { base: 10.0, height: 8.0 });
    }

    #[test]
    fn replace_unknown_field() {
        let square = Dimensions::Square { side: 3.0 };
        assert!(square.with(DimensionField::Base, 1.0).is_err());
        assert_eq!(square.get(DimensionField::Height), None);
    }

    #[test]
    fn display_lists_fields() {
        let rect = Dimensions::Rectangle { base: 100.0, height: 50.5 };
        assert_eq!(rect.to_string(), "Retângulo: Base = 100m, Altura = 50.5m");

        let square = Dimensions::Square { side: 7.0 };
        assert_eq!(square.to_string(), "Quadrado: Lado = 7m");
    }
}
