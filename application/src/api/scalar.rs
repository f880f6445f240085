//! GraphQL scalar definitions.

use std::{fmt, marker::PhantomData, str::FromStr};

use juniper::{
    GraphQLType, InputValue, ParseScalarResult, ParseScalarValue, ScalarToken,
    ScalarValue, Value,
};

/// Helper type to use in `#[graphql(with = ..)]` attribute of a newtype
/// scalar wrapping a domain value.
///
/// The domain value `As` is rendered with its [`Display`] impl and parsed
/// with its [`FromStr`] impl, so the same validation applies to GraphQL
/// inputs as to the domain itself.
///
/// Target type must implement [`TryFrom`] and [`AsRef`] for `As` type.
///
/// [`Display`]: fmt::Display
#[derive(Debug)]
pub struct Via<As>(PhantomData<As>);

impl<As> Via<As> {
    /// Converts the target type into a string scalar [`Value`].
    pub fn to_output<T, S>(value: &T) -> Value<S>
    where
        As: fmt::Display,
        T: AsRef<As>,
        S: ScalarValue,
    {
        Value::from(value.as_ref().to_string())
    }

    /// Parses the target type from a string scalar [`InputValue`].
    ///
    /// # Errors
    ///
    /// If the input value is not a string, or cannot be parsed into `As`
    /// type, or cannot be converted into the target type.
    pub fn from_input<T, S>(input: &InputValue<S>) -> Result<T, String>
    where
        As: FromStr,
        As::Err: fmt::Display,
        T: TryFrom<As> + GraphQLType<S, TypeInfo = ()>,
        T::Error: fmt::Display,
        S: ScalarValue,
    {
        let name = T::name(&()).unwrap_or("scalar");

        let s = input.as_string_value().ok_or_else(|| {
            format!("Cannot parse `{name}` from non-string value: {input}")
        })?;
        let value = s
            .parse::<As>()
            .map_err(|e| format!("Cannot parse `{name}` from \"{s}\": {e}"))?;
        T::try_from(value).map_err(|e| format!("Invalid `{name}`: {e}"))
    }

    /// Parses the provided [`ScalarToken`] as a [`String`].
    ///
    /// # Errors
    ///
    /// If the token is not a string.
    pub fn parse_token<S: ScalarValue>(
        value: ScalarToken<'_>,
    ) -> ParseScalarResult<S> {
        <String as ParseScalarValue<S>>::from_str(value)
    }
}

#[cfg(test)]
mod spec {
    use juniper::{DefaultScalarValue, InputValue};
    use service::domain;

    use crate::api::room;

    use super::Via;

    type RoomName = Via<domain::room::Name>;

    #[test]
    fn parses_valid_input() {
        let name = RoomName::from_input::<room::Name, DefaultScalarValue>(
            &InputValue::scalar("A1"),
        )
        .unwrap();

        assert_eq!(name.to_string(), "A1");
    }

    #[test]
    fn rejects_invalid_input() {
        let blank = RoomName::from_input::<room::Name, DefaultScalarValue>(
            &InputValue::scalar(""),
        );
        assert!(blank.unwrap_err().contains("RoomName"));

        let number = RoomName::from_input::<room::Name, DefaultScalarValue>(
            &InputValue::scalar(101),
        );
        assert!(number.is_err());
    }

    #[test]
    fn rejects_negative_price() {
        let price = Via::<domain::room::Price>::from_input::<
            room::Price,
            DefaultScalarValue,
        >(&InputValue::scalar("-1"));

        assert!(price.is_err());
    }
}
