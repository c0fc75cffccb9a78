use rstest::rstest;

use crate::{Classification, Decimal, DecimalOptions};

use Classification::{Complete, Placeholder, Rejected};

fn bounded(min: Option<f64>, max: Option<f64>) -> Decimal {
    Decimal::new(DecimalOptions {
        min,
        max,
        ..Default::default()
    })
}

#[rstest]
#[case("", Placeholder)]
#[case("-", Placeholder)]
#[case("+", Placeholder)]
#[case(".", Placeholder)]
#[case("-.", Placeholder)]
#[case("+.", Placeholder)]
#[case("0", Complete(0.0))]
#[case("-0", Complete(0.0))]
#[case("+0", Complete(0.0))]
#[case("0.", Complete(0.0))]
#[case("-0.", Complete(0.0))]
#[case("+0.", Complete(0.0))]
fn incomplete_input(#[case] input: &str, #[case] expected: Classification) {
    assert_eq!(Decimal::default().classify(input), expected, "{input:?}");
}

#[rstest]
#[case("1", Complete(1.0))]
#[case("1.1", Complete(1.1))]
#[case("-1", Complete(-1.0))]
#[case("-1.1", Complete(-1.1))]
#[case("123", Complete(123.0))]
#[case("-123", Complete(-123.0))]
#[case("+123", Complete(123.0))]
#[case("123.", Complete(123.0))]
#[case("-123.", Complete(-123.0))]
#[case("+123.", Complete(123.0))]
#[case("123.45", Complete(123.45))]
#[case("-123.45", Complete(-123.45))]
#[case("+123.45", Complete(123.45))]
#[case("+0.0", Complete(0.0))]
#[case("-0.0", Complete(0.0))]
#[case("0.1", Complete(0.1))]
#[case("-0.1", Complete(-0.1))]
#[case(".123", Complete(0.123))]
#[case("+.123", Complete(0.123))]
#[case("-.123", Complete(-0.123))]
#[case("007", Complete(7.0))]
fn unbounded(#[case] input: &str, #[case] expected: Classification) {
    assert_eq!(Decimal::default().classify(input), expected, "{input:?}");
}

#[rstest]
#[case("1", Placeholder)]
#[case("49", Placeholder)]
#[case("49.9", Placeholder)]
#[case("-1", Rejected)]
#[case("-51", Rejected)]
#[case("-50.1", Rejected)]
#[case("50", Complete(50.0))]
#[case("50.001", Complete(50.001))]
#[case("61", Complete(61.0))]
#[case("500", Complete(500.0))]
fn integer_min(#[case] input: &str, #[case] expected: Classification) {
    assert_eq!(bounded(Some(50.0), None).classify(input), expected, "{input:?}");
}

#[rstest]
#[case("1", Placeholder)]
#[case("49", Placeholder)]
#[case("49.9", Placeholder)]
#[case("50", Placeholder)]
#[case("50.0999", Placeholder)]
#[case("-1", Rejected)]
#[case("-51", Rejected)]
#[case("-50.1", Rejected)]
#[case("50.1", Complete(50.1))]
#[case("61", Complete(61.0))]
#[case("500", Complete(500.0))]
#[case("500.1", Complete(500.1))]
fn decimal_min(#[case] input: &str, #[case] expected: Classification) {
    assert_eq!(bounded(Some(50.1), None).classify(input), expected, "{input:?}");
}

#[rstest]
#[case("1", Complete(1.0))]
#[case("50", Complete(50.0))]
#[case("50.001", Rejected)]
#[case("51", Rejected)]
#[case("49.9", Complete(49.9))]
#[case("-1", Complete(-1.0))]
#[case("-51", Complete(-51.0))]
fn integer_max(#[case] input: &str, #[case] expected: Classification) {
    assert_eq!(bounded(None, Some(50.0)).classify(input), expected, "{input:?}");
}

#[rstest]
#[case("1", Complete(1.0))]
#[case("50", Complete(50.0))]
#[case("51", Rejected)]
#[case("50.1", Complete(50.1))]
#[case("50.001", Complete(50.001))]
#[case("49.9", Complete(49.9))]
#[case("-1", Complete(-1.0))]
#[case("-51", Complete(-51.0))]
fn decimal_max(#[case] input: &str, #[case] expected: Classification) {
    assert_eq!(bounded(None, Some(50.1)).classify(input), expected, "{input:?}");
}

#[rstest]
#[case("1", Placeholder)]
#[case("0", Placeholder)]
// No completion of "8" lands in range; the digit-count rule still admits it.
#[case("8", Placeholder)]
#[case("30", Complete(30.0))]
#[case("50", Complete(50.0))]
#[case("70", Complete(70.0))]
#[case("71", Rejected)]
#[case("+50", Complete(50.0))]
#[case("+70", Complete(70.0))]
#[case("+71", Rejected)]
#[case("-0", Rejected)]
#[case("-1", Rejected)]
#[case("-51", Rejected)]
#[case("-71", Rejected)]
fn positive_range(#[case] input: &str, #[case] expected: Classification) {
    assert_eq!(
        bounded(Some(30.0), Some(70.0)).classify(input),
        expected,
        "{input:?}"
    );
}

#[rstest]
#[case("-1", Placeholder)]
#[case("-0", Placeholder)]
#[case("-8", Placeholder)]
#[case("-30", Complete(-30.0))]
#[case("-50", Complete(-50.0))]
#[case("-70", Complete(-70.0))]
#[case("-71", Rejected)]
#[case("0", Rejected)]
#[case("+0", Rejected)]
#[case("+1", Rejected)]
#[case("1", Rejected)]
#[case("51", Rejected)]
#[case("71", Rejected)]
fn negative_range(#[case] input: &str, #[case] expected: Classification) {
    assert_eq!(
        bounded(Some(-70.0), Some(-30.0)).classify(input),
        expected,
        "{input:?}"
    );
}

#[rstest]
#[case("1", Complete(1.0))]
#[case("-1", Complete(-1.0))]
#[case("-0", Complete(0.0))]
#[case("0", Complete(0.0))]
#[case("-30", Complete(-30.0))]
#[case("-50", Complete(-50.0))]
#[case("-70", Rejected)]
#[case("30", Complete(30.0))]
#[case("50", Complete(50.0))]
#[case("70", Rejected)]
fn straddling_range(#[case] input: &str, #[case] expected: Classification) {
    assert_eq!(
        bounded(Some(-50.0), Some(50.0)).classify(input),
        expected,
        "{input:?}"
    );
}

#[rstest]
#[case(Some(50.0), None)]
#[case(None, Some(-50.0))]
#[case(Some(30.0), Some(70.0))]
#[case(Some(-1e300), Some(1e300))]
fn digitless_prefixes_ignore_bounds(#[case] min: Option<f64>, #[case] max: Option<f64>) {
    let grammar = bounded(min, max);
    for input in ["", "-", "+", ".", "-.", "+."] {
        assert_eq!(grammar.classify(input), Placeholder, "{input:?}");
    }
}

#[test]
fn zero_minimum_excludes_the_negative_sign() {
    let grammar = bounded(Some(0.0), Some(10.0));
    assert_eq!(grammar.classify("0"), Complete(0.0));
    assert_eq!(grammar.classify("-0"), Rejected);
    assert_eq!(grammar.classify("-"), Placeholder);
}

#[rstest]
#[case(Some(f64::NAN), Some(f64::NAN), "5", Complete(5.0))]
#[case(Some(f64::NAN), None, "-5", Complete(-5.0))]
#[case(Some(f64::INFINITY), None, "5", Placeholder)]
#[case(None, Some(f64::NEG_INFINITY), "-5", Placeholder)]
#[case(Some(f64::NEG_INFINITY), Some(f64::INFINITY), "-5.5", Complete(-5.5))]
#[case(None, Some(f64::INFINITY), "1e", Rejected)]
fn non_finite_bounds(
    #[case] min: Option<f64>,
    #[case] max: Option<f64>,
    #[case] input: &str,
    #[case] expected: Classification,
) {
    assert_eq!(bounded(min, max).classify(input), expected, "{input:?}");
}

#[test]
fn oversized_literals_are_range_checked_as_infinite() {
    use alloc::string::String;

    let ones: String = core::iter::repeat_n('1', 400).collect();
    assert_eq!(Decimal::default().classify(&ones), Complete(f64::INFINITY));
    assert_eq!(bounded(None, Some(1e300)).classify(&ones), Rejected);
    assert_eq!(bounded(Some(1e300), None).classify(&ones), Complete(f64::INFINITY));

    let negative = alloc::format!("-{ones}");
    assert_eq!(bounded(Some(-1e300), None).classify(&negative), Rejected);
}
