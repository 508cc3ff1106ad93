use serde::de::{Deserializer, Error as DeError};

use super::{ApiObject, ModelError};
use crate::internal::prelude::*;

/// Coerces a JSON value to an unsigned integer the way the Bot API's own clients do.
///
/// Integers are taken as is, finite non-negative floats are truncated, and strings are parsed
/// as decimal numbers. Anything else, including values that do not fit, yields `None`.
#[must_use]
pub fn coerce_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return u32::try_from(int).ok();
            }

            let float = number.as_f64()?;
            if float.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&float) {
                Some(float.trunc() as u32)
            } else {
                None
            }
        },
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Coerces the integer field `field` of a payload in place, if it is present.
pub(super) fn coerce_field<T: ApiObject>(map: &mut JsonMap, field: &'static str) -> Result<()> {
    if let Some(value) = map.get_mut(field) {
        let Some(int) = coerce_u32(value) else {
            return Err(ModelError::InvalidInteger {
                kind: T::KIND,
                field,
                value: value.clone(),
            }
            .into());
        };

        *value = Value::from(int);
    }

    Ok(())
}

/// Deserializes an unsigned integer leniently, following [`coerce_u32`].
///
/// Used with `#[serde(deserialize_with = "coerced_int::deserialize")]`.
pub mod coerced_int {
    use serde::Deserialize;

    use super::*;

    #[allow(clippy::missing_errors_doc)]
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> StdResult<u32, D::Error> {
        let value = Value::deserialize(deserializer)?;
        coerce_u32(&value).ok_or_else(|| {
            D::Error::custom(format!("expected an unsigned integer, got {value}"))
        })
    }
}

/// Deserializes an optional nested object, treating `null` and `{}` as no object.
///
/// Used with `#[serde(default, deserialize_with = "absent_object::deserialize")]`.
pub mod absent_object {
    use serde::de::DeserializeOwned;
    use serde::Deserialize;

    use super::*;
    use crate::json::is_absent;

    #[allow(clippy::missing_errors_doc)]
    pub fn deserialize<'de, D, T>(deserializer: D) -> StdResult<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        if is_absent(&value) {
            return Ok(None);
        }

        T::deserialize(value).map(Some).map_err(D::Error::custom)
    }
}

/// Deserializes a list, treating `null` as an empty list.
///
/// Used with `#[serde(default, deserialize_with = "null_as_empty::deserialize")]`.
pub mod null_as_empty {
    use serde::Deserialize;

    use super::*;

    #[allow(clippy::missing_errors_doc)]
    pub fn deserialize<'de, D, T>(deserializer: D) -> StdResult<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
    }
}
