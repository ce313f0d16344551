use std::fmt::Display;
use std::ops::RangeInclusive;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub fn ensure_in_range<T>(name: &str, value: T, range: RangeInclusive<T>) -> Result<(), String>
where
    T: PartialOrd + Display,
{
    if range.contains(&value) {
        return Ok(());
    }
    Err(format!(
        "{} must be between {} and {}, got {}",
        name,
        range.start(),
        range.end(),
        value
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_inside_range_passes() {
        assert!(ensure_in_range("field_size", 15, 2..=100).is_ok());
    }

    #[test]
    fn test_value_outside_range_names_the_field() {
        let err = ensure_in_range("tick_interval_ms", 10, 50..=1000).unwrap_err();

        assert_eq!(err, "tick_interval_ms must be between 50 and 1000, got 10");
    }
}
