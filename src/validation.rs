use std::fmt::Display;

/// Form hooks want either "ok" or the message to show under the field.
pub trait FieldValidation {
    fn field_result(self) -> Result<(), String>;
}

impl<T, E: Display> FieldValidation for Result<T, E> {
    fn field_result(self) -> Result<(), String> {
        self.map(|_| ()).map_err(|err| err.to_string())
    }
}
