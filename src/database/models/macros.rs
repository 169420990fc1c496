/// Copies every supplied field of an update payload onto the matching field
/// of a stored record. Payload fields are `Option<Option<T>>`: `None` keeps
/// the stored value and `Some(None)` clears it.
macro_rules! merge_fields {
    ($record:expr, $input:expr; $($field:ident),* $(,)?) => {
        $(
            if let Some(value) = $input.$field {
                $record.$field = value;
            }
        )*
    };
}

pub(crate) use merge_fields;
