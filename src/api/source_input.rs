use crate::core::SourcePoint;
use crate::error::{GreenError, GreenResult};

/// Parses one coordinate entry.
///
/// Surrounding whitespace is ignored. Text that is not a finite real number
/// (including `nan` and `inf`) is rejected.
pub fn parse_coordinate(field: &'static str, text: &str) -> GreenResult<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| GreenError::InvalidNumericInput {
            field,
            input: text.to_owned(),
        })
}

/// Parses both coordinate entries; the first failure wins.
pub fn parse_source(x_text: &str, y_text: &str) -> GreenResult<SourcePoint> {
    let x = parse_coordinate("x_0", x_text)?;
    let y = parse_coordinate("y_0", y_text)?;
    Ok(SourcePoint::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_padded_numbers() {
        let source = parse_source(" 0.3 ", "7e-1").expect("valid source");
        assert_eq!(source, SourcePoint::new(0.3, 0.7));
    }

    #[test]
    fn rejects_text_and_non_finite_values() {
        for bad in ["abc", "", "  ", "nan", "inf", "-inf", "0.5.1", "1,5"] {
            let err = parse_coordinate("x_0", bad).expect_err(bad);
            assert!(matches!(
                err,
                GreenError::InvalidNumericInput { field: "x_0", .. }
            ));
        }
    }

    #[test]
    fn reports_failing_field() {
        let err = parse_source("0.5", "oops").expect_err("y fails");
        match err {
            GreenError::InvalidNumericInput { field, input } => {
                assert_eq!(field, "y_0");
                assert_eq!(input, "oops");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
