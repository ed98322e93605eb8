use async_trait::async_trait;
use axum::extract::multipart::Field;
use axum_typed_multipart::{TryFromField, TypedMultipartError};
use bigdecimal::{BigDecimal, ParseBigDecimalError};
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Price(pub BigDecimal);

#[async_trait]
impl TryFromField for Price {
    async fn try_from_field<'a>(
        field: Field<'a>,
        _: Option<usize>,
    ) -> Result<Self, TypedMultipartError> {
        let text = field
            .text()
            .await
            .map_err(|err| TypedMultipartError::InvalidRequestBody { source: err })?;

        BigDecimal::from_str(text.as_str()).map(Price).map_err(|err| {
            tracing::error!("Error occurred while parsing price: {}", err);
            TypedMultipartError::UnknownField {
                field_name: String::from("price"),
            }
        })
    }
}

/// Partial-update form value. A blank `price` field keeps the stored price,
/// the same way blank `name` and `description` fields do.
#[derive(Debug, Clone)]
pub struct PriceUpdate(pub Option<BigDecimal>);

pub fn parse_price_update(text: &str) -> Result<Option<BigDecimal>, ParseBigDecimalError> {
    if text.is_empty() {
        return Ok(None);
    }

    BigDecimal::from_str(text).map(Some)
}

#[async_trait]
impl TryFromField for PriceUpdate {
    async fn try_from_field<'a>(
        field: Field<'a>,
        _: Option<usize>,
    ) -> Result<Self, TypedMultipartError> {
        let text = field
            .text()
            .await
            .map_err(|err| TypedMultipartError::InvalidRequestBody { source: err })?;

        parse_price_update(text.as_str())
            .map(PriceUpdate)
            .map_err(|err| {
                tracing::error!("Error occurred while parsing price: {}", err);
                TypedMultipartError::UnknownField {
                    field_name: String::from("price"),
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::parse_price_update;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    #[test]
    fn blank_price_means_keep_stored_value() {
        assert_eq!(parse_price_update("").unwrap(), None);
    }

    #[test]
    fn price_text_is_parsed() {
        assert_eq!(
            parse_price_update("12.50").unwrap(),
            Some(BigDecimal::from_str("12.50").unwrap())
        );
    }

    #[test]
    fn unparseable_price_is_rejected() {
        assert!(parse_price_update("free").is_err());
    }
}
