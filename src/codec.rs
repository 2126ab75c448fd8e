//! JSON request bodies and result shapes for response bodies.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

use crate::error::{Error, Result};

/// A free-form parameter mapping for PUT and POST bodies.
pub type Params = serde_json::Map<String, serde_json::Value>;

/// No parameters, for PUT and POST calls that send none.
pub const NO_PARAMS: Option<&'static Params> = None;

/// Serializes request parameters into a JSON object body.
///
/// Any `Serialize` value is accepted as long as it serializes to a JSON
/// object (a map or a struct); anything else is an [`Error::Encoding`].
pub fn encode<P>(params: &P) -> Result<Vec<u8>>
where
    P: Serialize + ?Sized,
{
    let value = serde_json::to_value(params).map_err(Error::Encoding)?;
    if !value.is_object() {
        return Err(Error::Encoding(serde::ser::Error::custom(format!(
            "request parameters must be a JSON object, got {}",
            json_kind(&value)
        ))));
    }
    serde_json::to_vec(&value).map_err(Error::Encoding)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// How a successful response body turns into a value.
///
/// The set of shapes is closed: [`Json`], [`Text`] and [`NoContent`].
pub trait Decode {
    type Output;

    fn decode(body: &[u8]) -> Result<Self::Output>;
}

/// Deserialize the body as JSON into `T`.
///
/// A JSON `null` body decodes to `None` when `T` is an `Option`; an empty body
/// is not valid JSON and fails.
pub struct Json<T>(PhantomData<fn() -> T>);

impl<T: DeserializeOwned> Decode for Json<T> {
    type Output = T;

    fn decode(body: &[u8]) -> Result<T> {
        serde_json::from_slice(body).map_err(Error::Decoding)
    }
}

/// Return the body verbatim, without JSON parsing.
pub struct Text;

impl Decode for Text {
    type Output = String;

    fn decode(body: &[u8]) -> Result<String> {
        String::from_utf8(body.to_vec())
            .map_err(|e| Error::Decoding(serde::de::Error::custom(e)))
    }
}

/// No result is expected; the body is ignored.
pub struct NoContent;

impl Decode for NoContent {
    type Output = ();

    fn decode(_body: &[u8]) -> Result<()> {
        Ok(())
    }
}
