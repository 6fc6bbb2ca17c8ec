use roman_core::numeral::{from_roman, parse_strict, to_roman, ParseError, RangeError};
use roman_core::settings::settings;
use roman_core::store::{ConversionRecord, ConversionStore, StoreError};

use super::resolve_store;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error("invalid numeral: {0}")]
    Parse(#[from] ParseError),
    #[error("saving conversion: {0}")]
    Store(#[from] StoreError),
}

/// Convert `num` and append `[roman, num]` to `store` when given.
pub fn decimal_to_roman(
    num: i64,
    store: Option<&ConversionStore>,
) -> Result<String, ConvertError> {
    let roman = to_roman(num)?;
    if let Some(store) = store {
        // to_roman succeeded, so num is within 1..=3999.
        store.append_conversion(&ConversionRecord::new(roman.clone(), num as u32))?;
    }
    Ok(roman)
}

/// Convert `numeral` and append `[numeral, value]` to `store` when given.
pub fn roman_to_decimal(
    numeral: &str,
    strict: bool,
    store: Option<&ConversionStore>,
) -> Result<u32, ConvertError> {
    let value = if strict {
        u32::from(parse_strict(numeral)?)
    } else {
        from_roman(numeral)
    };
    if let Some(store) = store {
        store.append_conversion(&ConversionRecord::new(numeral, value))?;
    }
    Ok(value)
}

pub fn to_roman_cmd(num: i64, save: bool, file: Option<&str>) {
    let store = save.then(|| resolve_store(file));
    let roman = die!(decimal_to_roman(num, store.as_ref()), "Error: {}");
    println!("{roman}");
}

pub fn from_roman_cmd(numeral: &str, strict: bool, save: bool, file: Option<&str>) {
    let strict = strict || settings().parse.strict;
    let store = save.then(|| resolve_store(file));
    let value = die!(
        roman_to_decimal(numeral, strict, store.as_ref()),
        "Error: {}"
    );
    println!("{value}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_to_roman_without_store() {
        assert_eq!(decimal_to_roman(1994, None).unwrap(), "MCMXCIV");
        assert!(matches!(
            decimal_to_roman(0, None),
            Err(ConvertError::Range(RangeError(0)))
        ));
    }

    #[test]
    fn decimal_to_roman_saves_pair() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConversionStore::new(dir.path().join("out.csv"));
        decimal_to_roman(1994, Some(&store)).unwrap();
        assert_eq!(store.load().unwrap(), vec![vec!["MCMXCIV", "1994"]]);
    }

    #[test]
    fn out_of_range_saves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConversionStore::new(dir.path().join("out.csv"));
        assert!(decimal_to_roman(4000, Some(&store)).is_err());
        assert!(!store.path().exists());
    }

    #[test]
    fn roman_to_decimal_modes() {
        assert_eq!(roman_to_decimal("MCMXCIV", false, None).unwrap(), 1994);
        assert_eq!(roman_to_decimal("XIIZ", false, None).unwrap(), 12);
        assert!(matches!(
            roman_to_decimal("XIIZ", true, None),
            Err(ConvertError::Parse(ParseError::Unconsumed { position: 3, .. }))
        ));
        assert_eq!(roman_to_decimal("XL", true, None).unwrap(), 40);
    }

    #[test]
    fn roman_to_decimal_saves_pair() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConversionStore::new(dir.path().join("out.csv"));
        roman_to_decimal("XL", false, Some(&store)).unwrap();
        assert_eq!(
            store.load_conversions().unwrap(),
            vec![ConversionRecord::new("XL", 40)]
        );
    }
}
