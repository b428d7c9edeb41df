//! Fixed-point money (scale 2, half-even rounding).

use core::cmp::Ordering;
use core::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, ValueObject};

/// Decimal places kept by every amount.
pub const SCALE: u32 = 2;

/// An amount of money in a single currency.
///
/// Stored as integer minor units (cents). Values in different currencies are
/// not comparable: [`Money::compare`] returns an error and `partial_cmp`
/// returns `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRepr")]
pub struct Money {
    amount_minor: i64,
    currency: String,
}

/// Wire form of [`Money`]; checked on the way in.
#[derive(Deserialize)]
struct MoneyRepr {
    amount_minor: i64,
    currency: String,
}

impl TryFrom<MoneyRepr> for Money {
    type Error = DomainError;

    fn try_from(repr: MoneyRepr) -> Result<Self, Self::Error> {
        Money::from_minor_units(repr.amount_minor, &repr.currency)
    }
}

impl Money {
    /// Build from minor units, e.g. `1050` for 10.50.
    pub fn from_minor_units(amount_minor: i64, currency: &str) -> DomainResult<Self> {
        Ok(Self {
            amount_minor,
            currency: normalize_currency(currency)?,
        })
    }

    /// Parse a decimal amount such as `"10.5"` or `"-0.125"`.
    ///
    /// Extra fraction digits are rounded half-even to two places.
    pub fn parse(amount: &str, currency: &str) -> DomainResult<Self> {
        let currency = normalize_currency(currency)?;
        let amount_minor = parse_minor_units(amount)?;
        Ok(Self {
            amount_minor,
            currency,
        })
    }

    pub fn zero(currency: &str) -> DomainResult<Self> {
        Self::from_minor_units(0, currency)
    }

    pub fn amount_minor(&self) -> i64 {
        self.amount_minor
    }

    /// The amount as a decimal with two places.
    pub fn amount(&self) -> Decimal {
        Decimal::new(self.amount_minor, SCALE)
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Order two amounts of the same currency.
    pub fn compare(&self, other: &Money) -> DomainResult<Ordering> {
        if self.currency != other.currency {
            return Err(DomainError::CurrencyMismatch {
                left: self.currency.clone(),
                right: other.currency.clone(),
            });
        }
        Ok(self
            .amount_minor
            .cmp(&other.amount_minor)
            .then_with(|| self.currency.cmp(&other.currency)))
    }

    pub fn checked_add(&self, other: &Money) -> DomainResult<Money> {
        self.compare(other)?;
        let amount_minor = self
            .amount_minor
            .checked_add(other.amount_minor)
            .ok_or_else(|| DomainError::invalid_money("amount overflow"))?;
        Ok(Money {
            amount_minor,
            currency: self.currency.clone(),
        })
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount(), self.currency)
    }
}

impl ValueObject for Money {}

fn normalize_currency(currency: &str) -> DomainResult<String> {
    let code = currency.trim();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(DomainError::invalid_money(format!(
            "currency must be a 3-letter code, got '{currency}'"
        )));
    }
    Ok(code.to_ascii_uppercase())
}

fn parse_minor_units(amount: &str) -> DomainResult<i64> {
    let invalid = || DomainError::invalid_money(format!("not a decimal amount: '{amount}'"));

    let parsed = Decimal::from_str(amount.trim()).map_err(|_| invalid())?;
    parsed
        .round_dp_with_strategy(SCALE, RoundingStrategy::MidpointNearestEven)
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|minor| minor.to_i64())
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brl(amount: &str) -> Money {
        Money::parse(amount, "BRL").unwrap()
    }

    #[test]
    fn parses_and_normalizes() {
        assert_eq!(brl("10").amount_minor(), 1000);
        assert_eq!(brl("10.5").amount_minor(), 1050);
        assert_eq!(brl(" 0.99 ").amount_minor(), 99);
        assert_eq!(brl("-1.25").amount_minor(), -125);
        assert_eq!(Money::parse("1", "usd").unwrap().currency(), "USD");
    }

    #[test]
    fn rounds_half_even() {
        assert_eq!(brl("0.125").amount_minor(), 12);
        assert_eq!(brl("0.135").amount_minor(), 14);
        assert_eq!(brl("0.1251").amount_minor(), 13);
        assert_eq!(brl("0.124999").amount_minor(), 12);
        assert_eq!(brl("2.675").amount_minor(), 268);
        assert_eq!(brl("-0.125").amount_minor(), -12);
        assert_eq!(brl("0.999").amount_minor(), 100);
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "1.2.3", "abc", "1e3", "١٢"] {
            assert!(Money::parse(bad, "BRL").is_err(), "accepted {bad:?}");
        }
        assert!(Money::parse("1", "REAL").is_err());
        assert!(Money::parse("1", "B1").is_err());
    }

    #[test]
    fn displays_two_decimals() {
        assert_eq!(brl("10.5").to_string(), "10.50 BRL");
        assert_eq!(brl("-0.05").to_string(), "-0.05 BRL");
    }

    #[test]
    fn compare_within_currency() {
        assert_eq!(brl("1.00").compare(&brl("2.00")).unwrap(), Ordering::Less);
        assert_eq!(brl("2.00").compare(&brl("2")).unwrap(), Ordering::Equal);
        assert!(brl("3") > brl("2.99"));
    }

    #[test]
    fn compare_across_currencies_fails() {
        let usd = Money::parse("1", "USD").unwrap();
        let err = brl("1").compare(&usd).unwrap_err();
        assert_eq!(
            err,
            DomainError::CurrencyMismatch {
                left: "BRL".to_string(),
                right: "USD".to_string()
            }
        );
        assert_eq!(brl("1").partial_cmp(&usd), None);
        assert!(brl("1").checked_add(&usd).is_err());
    }

    #[test]
    fn deserializing_checks_the_currency() {
        let lower: Money =
            serde_json::from_str(r#"{"amount_minor":100,"currency":"brl"}"#).unwrap();
        assert_eq!(lower, brl("1"));
        assert_eq!(lower.compare(&brl("1")).unwrap(), Ordering::Equal);

        let err = serde_json::from_str::<Money>(r#"{"amount_minor":100,"currency":"R$ 1"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("currency must be a 3-letter code"));
    }

    #[test]
    fn serialized_shape_is_minor_units_and_code() {
        let json = serde_json::to_value(brl("10.5")).unwrap();
        assert_eq!(json, serde_json::json!({"amount_minor": 1050, "currency": "BRL"}));
    }

    #[test]
    fn amount_is_a_two_place_decimal() {
        assert_eq!(brl("2.675").amount(), Decimal::new(268, 2));
    }

    #[test]
    fn checked_add_sums_minor_units() {
        assert_eq!(brl("1.25").checked_add(&brl("0.75")).unwrap(), brl("2"));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: same-currency comparison is a total order matching
            /// the minor-unit order.
            #[test]
            fn same_currency_order_is_total(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
                let left = Money::from_minor_units(a, "BRL").unwrap();
                let right = Money::from_minor_units(b, "BRL").unwrap();

                prop_assert_eq!(left.compare(&right).unwrap(), a.cmp(&b));
                prop_assert_eq!(right.compare(&left).unwrap(), b.cmp(&a));
            }

            /// Property: rendering then parsing is lossless at scale 2.
            #[test]
            fn display_then_parse_is_lossless(a in -1_000_000_000i64..1_000_000_000) {
                let money = Money::from_minor_units(a, "EUR").unwrap();
                let rendered = money.to_string();
                let amount = rendered.trim_end_matches(" EUR");
                prop_assert_eq!(Money::parse(amount, "EUR").unwrap(), money);
            }

            /// Property: a third fraction digit of exactly 5 rounds to even.
            #[test]
            fn exact_half_rounds_to_even(units in 0i64..100_000, cents in 0i64..100) {
                let amount = format!("{units}.{cents:02}5");
                let parsed = Money::parse(&amount, "BRL").unwrap().amount_minor();
                let base = units * 100 + cents;
                let expected = if base % 2 == 0 { base } else { base + 1 };
                prop_assert_eq!(parsed, expected);
            }
        }
    }
}
