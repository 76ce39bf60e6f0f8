use super::*;
use rstest::rstest;
use rust_decimal_macros::dec;
use std::str::FromStr;

#[rstest]
#[case(dec!(0), "Rp 0")]
#[case(dec!(999), "Rp 999")]
#[case(dec!(1000), "Rp 1.000")]
#[case(dec!(839160), "Rp 839.160")]
#[case(dec!(1250000), "Rp 1.250.000")]
#[case(dec!(123456789012), "Rp 123.456.789.012")]
fn test_format_rupiah(#[case] amount: Decimal, #[case] expected: &str) {
    assert_eq!(Money::idr(amount).format(), expected);
}

#[rstest]
#[case(dec!(1500.5), "Rp 1.501")]
#[case(dec!(1500.49), "Rp 1.500")]
#[case(dec!(-1500.5), "-Rp 1.501")]
#[case(dec!(-0.4), "Rp 0")]
fn test_format_rounds_half_away_from_zero(#[case] amount: Decimal, #[case] expected: &str) {
    assert_eq!(Money::idr(amount).format(), expected);
}

#[test]
fn test_format_with_fraction_digits() {
    let money = Money::new(dec!(1234.5), Currency::Usd);
    assert_eq!(money.format(), "US$ 1.234,50");

    let money = Money::new(dec!(0.005), Currency::Eur);
    assert_eq!(money.format(), "€ 0,01");
}

#[test]
fn test_rounded_keeps_amount_exact() {
    let money = Money::idr(dec!(83160.55));
    assert_eq!(money.rounded(), dec!(83161));
    assert_eq!(money.amount, dec!(83160.55));
}

#[test]
fn test_money_zero() {
    let money = Money::zero(Currency::Idr);
    assert!(money.is_zero());
    assert!(!money.is_negative());
    assert_eq!(money.currency, Currency::Idr);
}

#[test]
fn test_money_is_negative() {
    assert!(Money::idr(dec!(-10)).is_negative());
    assert!(!Money::idr(dec!(10)).is_negative());
}

#[test]
fn test_currency_from_str() {
    assert_eq!(Currency::from_str("IDR").unwrap(), Currency::Idr);
    assert_eq!(Currency::from_str("idr").unwrap(), Currency::Idr);
    assert_eq!(Currency::from_str("USD").unwrap(), Currency::Usd);
    assert!(Currency::from_str("XXX").is_err());
    assert!(Currency::from_str("").is_err());
}

#[test]
fn test_currency_display_round_trips() {
    for currency in [
        Currency::Idr,
        Currency::Usd,
        Currency::Eur,
        Currency::Sgd,
        Currency::Jpy,
    ] {
        assert_eq!(Currency::from_str(&currency.to_string()).unwrap(), currency);
    }
}
