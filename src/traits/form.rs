//! Platform form-encoding primitive.

use crate::models::FormBody;

/// Captures a form's current field state as a multipart payload.
///
/// The output is passed through to the dispatcher untouched.
pub trait FormEncoder<T> {
    fn encode(&self, form: &T) -> FormBody;
}

impl<T, F> FormEncoder<T> for F
where
    F: Fn(&T) -> FormBody,
{
    fn encode(&self, form: &T) -> FormBody {
        self(form)
    }
}
