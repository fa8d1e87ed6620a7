//! Parameter shapes a route can carry.
//!
//! A route's parameters are a tuple of zero to three values. The tuple type
//! fixes the arity at compile time, and the values are stored as JSON so a
//! stack entry can be persisted and restored without knowing its types.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use super::error::ParamError;

pub trait RouteParams: Sized {
    const ARITY: usize;

    fn encode(self) -> Result<Vec<Value>, serde_json::Error>;

    fn decode(values: &[Value]) -> Result<Self, ParamError>;
}

fn check_arity(expected: usize, values: &[Value]) -> Result<(), ParamError> {
    if values.len() == expected {
        Ok(())
    } else {
        Err(ParamError::Arity {
            expected,
            found: values.len(),
        })
    }
}

fn decode_at<T: DeserializeOwned>(values: &[Value], index: usize) -> Result<T, ParamError> {
    serde_json::from_value(values[index].clone()).map_err(|source| ParamError::Type { index, source })
}

impl RouteParams for () {
    const ARITY: usize = 0;

    fn encode(self) -> Result<Vec<Value>, serde_json::Error> {
        Ok(Vec::new())
    }

    fn decode(values: &[Value]) -> Result<Self, ParamError> {
        check_arity(Self::ARITY, values)
    }
}

impl<A> RouteParams for (A,)
where
    A: Serialize + DeserializeOwned,
{
    const ARITY: usize = 1;

    fn encode(self) -> Result<Vec<Value>, serde_json::Error> {
        Ok(vec![serde_json::to_value(self.0)?])
    }

    fn decode(values: &[Value]) -> Result<Self, ParamError> {
        check_arity(Self::ARITY, values)?;
        Ok((decode_at(values, 0)?,))
    }
}

impl<A, B> RouteParams for (A, B)
where
    A: Serialize + DeserializeOwned,
    B: Serialize + DeserializeOwned,
{
    const ARITY: usize = 2;

    fn encode(self) -> Result<Vec<Value>, serde_json::Error> {
        Ok(vec![serde_json::to_value(self.0)?, serde_json::to_value(self.1)?])
    }

    fn decode(values: &[Value]) -> Result<Self, ParamError> {
        check_arity(Self::ARITY, values)?;
        Ok((decode_at(values, 0)?, decode_at(values, 1)?))
    }
}

impl<A, B, C> RouteParams for (A, B, C)
where
    A: Serialize + DeserializeOwned,
    B: Serialize + DeserializeOwned,
    C: Serialize + DeserializeOwned,
{
    const ARITY: usize = 3;

    fn encode(self) -> Result<Vec<Value>, serde_json::Error> {
        Ok(vec![
            serde_json::to_value(self.0)?,
            serde_json::to_value(self.1)?,
            serde_json::to_value(self.2)?,
        ])
    }

    fn decode(values: &[Value]) -> Result<Self, ParamError> {
        check_arity(Self::ARITY, values)?;
        Ok((
            decode_at(values, 0)?,
            decode_at(values, 1)?,
            decode_at(values, 2)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn arity_is_part_of_the_type() {
        assert_eq!(<() as RouteParams>::ARITY, 0);
        assert_eq!(<(String,) as RouteParams>::ARITY, 1);
        assert_eq!(<(String, u32) as RouteParams>::ARITY, 2);
        assert_eq!(<(String, u32, bool) as RouteParams>::ARITY, 3);
    }

    #[test]
    fn decode_rejects_wrong_length() {
        let err = <(String, u32)>::decode(&[json!("a")]).unwrap_err();
        assert!(matches!(
            err,
            ParamError::Arity {
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn decode_reports_bad_index() {
        let err = <(String, u32)>::decode(&[json!("a"), json!("not a number")]).unwrap_err();
        assert!(matches!(err, ParamError::Type { index: 1, .. }));
    }

    #[test]
    fn null_decodes_to_none() {
        let (id,) = <(Option<String>,)>::decode(&[Value::Null]).unwrap();
        assert_eq!(id, None);
    }
}
