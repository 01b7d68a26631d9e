//! Three-state optional fields.

/// An optional schema field.
///
/// Unlike `Option<T>`, a `Field` separates "not set" from "explicitly null":
/// `Absent` fields are omitted from the emitted document, `Null` fields are
/// emitted as `null`, and `Present` fields are emitted with their value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Field<T> {
    #[default]
    Absent,
    Null,
    Present(T),
}

impl<T> Field<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Field::Present(_))
    }

    /// Borrow the present value, if any.
    pub fn get(&self) -> Option<&T> {
        match self {
            Field::Present(value) => Some(value),
            _ => None,
        }
    }

    /// Collapse into an `Option`, losing the absent/null distinction.
    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Present(value) => Some(value),
            _ => None,
        }
    }

    /// `Some` becomes `Present`, `None` becomes `Absent`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Field::Present(value),
            None => Field::Absent,
        }
    }

    /// Take the value out, leaving `Absent` in its place.
    pub fn take(&mut self) -> Field<T> {
        std::mem::take(self)
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Present(value)
    }
}
