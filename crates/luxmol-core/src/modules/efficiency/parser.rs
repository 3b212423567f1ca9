use crate::domain::{Curve, MalformedCurveError};

/// Parse a two-column numeric table, one `wavelength_nm intensity` sample
/// per row, delimited by whitespace and/or commas. Blank lines and
/// `#`-prefixed comment lines are skipped. Rows with a different column
/// count or non-numeric fields are rejected with their line number; the
/// assembled samples then pass through `Curve` validation.
pub fn parse_curve_table(source: &str) -> Result<Curve, MalformedCurveError> {
    let mut wavelengths_nm = Vec::new();
    let mut intensities = Vec::new();

    for (index, raw_line) in source.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line
            .split(|character: char| character == ',' || character.is_whitespace())
            .filter(|field| !field.is_empty())
            .collect();
        if fields.len() != 2 {
            return Err(MalformedCurveError::ColumnCount {
                line: line_number,
                found: fields.len(),
            });
        }

        wavelengths_nm.push(parse_field(fields[0], line_number)?);
        intensities.push(parse_field(fields[1], line_number)?);
    }

    if wavelengths_nm.is_empty() {
        return Err(MalformedCurveError::EmptyTable);
    }

    Curve::from_samples(wavelengths_nm, intensities)
}

fn parse_field(field: &str, line_number: usize) -> Result<f64, MalformedCurveError> {
    field
        .parse::<f64>()
        .map_err(|_| MalformedCurveError::NonNumericField {
            line: line_number,
            token: field.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::parse_curve_table;
    use crate::domain::MalformedCurveError;

    #[test]
    fn parses_whitespace_delimited_rows() {
        let curve = parse_curve_table("400 0.1\n450\t0.4\n500  0.9\n550 1.0\n")
            .expect("table should parse");
        assert_eq!(curve.wavelengths_nm(), &[400.0, 450.0, 500.0, 550.0]);
        assert_eq!(curve.intensities(), &[0.1, 0.4, 0.9, 1.0]);
    }

    #[test]
    fn parses_comma_delimited_rows_with_comments_and_blanks() {
        let source = "# ISO/CIE excerpt\n\n400,0.1\n450, 0.4\n\n500,0.9\n550,1.0\n";
        let curve = parse_curve_table(source).expect("table should parse");
        assert_eq!(curve.len(), 4);
        assert_eq!(curve.max_wavelength_nm(), 550.0);
    }

    #[test]
    fn accepts_scientific_notation_intensities() {
        let curve = parse_curve_table("380 3.9e-5\n390 1.2e-4\n400 3.96e-4\n410 1.21e-3\n")
            .expect("table should parse");
        assert!((curve.intensities()[0] - 3.9e-5).abs() < 1.0e-20);
    }

    #[test]
    fn rejects_wrong_column_counts() {
        let three = parse_curve_table("400 0.1 9\n450 0.4\n500 0.9\n550 1.0\n")
            .expect_err("three columns should fail");
        assert_eq!(three, MalformedCurveError::ColumnCount { line: 1, found: 3 });

        let one = parse_curve_table("400 0.1\n450\n500 0.9\n550 1.0\n")
            .expect_err("one column should fail");
        assert_eq!(one, MalformedCurveError::ColumnCount { line: 2, found: 1 });
    }

    #[test]
    fn rejects_non_numeric_fields_with_line_numbers() {
        let error = parse_curve_table("400 0.1\n450 n/a\n500 0.9\n550 1.0\n")
            .expect_err("non-numeric field should fail");
        assert_eq!(
            error,
            MalformedCurveError::NonNumericField {
                line: 2,
                token: "n/a".to_string(),
            }
        );
    }

    #[test]
    fn rejects_empty_and_comment_only_tables() {
        assert_eq!(
            parse_curve_table("").expect_err("empty input"),
            MalformedCurveError::EmptyTable
        );
        assert_eq!(
            parse_curve_table("# header only\n\n").expect_err("comments only"),
            MalformedCurveError::EmptyTable
        );
    }

    #[test]
    fn rejects_tables_failing_curve_validation() {
        let error = parse_curve_table("400 0.1\n450 0.4\n440 0.9\n550 1.0\n")
            .expect_err("unordered wavelengths should fail");
        assert!(matches!(
            error,
            MalformedCurveError::NonIncreasingWavelength { index: 2, .. }
        ));

        let error = parse_curve_table("400 0.1\n450 0.4\n500 0.9\n")
            .expect_err("three rows should fail");
        assert!(matches!(error, MalformedCurveError::TooFewSamples { .. }));
    }
}
