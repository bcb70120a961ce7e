use crate::PriceError;

/// Parse a catalog price string into a non-negative amount.
///
/// The first character is a currency symbol and is dropped whatever it is;
/// the remainder must be a plain decimal number (`"$12.50"` -> `12.5`).
pub fn parse_price(raw: &str) -> Result<f64, PriceError> {
    let mut chars = raw.chars();
    if chars.next().is_none() {
        return Err(PriceError::Empty);
    }

    let amount = chars.as_str().trim();
    if amount.is_empty() {
        return Err(PriceError::Empty);
    }

    let value = amount
        .parse::<f64>()
        .map_err(|_| PriceError::Unparseable {
            value: raw.to_owned(),
        })?;

    if !value.is_finite() {
        return Err(PriceError::NonFinite {
            value: raw.to_owned(),
        });
    }
    if value < 0.0 {
        return Err(PriceError::Negative {
            value: raw.to_owned(),
        });
    }

    Ok(value)
}
