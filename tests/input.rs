use collatz_viz::error::InputError;
use collatz_viz::input::parse_start;

#[test]
fn test_valid_numbers() {
    assert_eq!(parse_start("6").unwrap().get(), 6);
    assert_eq!(parse_start("  27 \n").unwrap().get(), 27);
    assert_eq!(parse_start("+1").unwrap().get(), 1);
    assert_eq!(parse_start("18446744073709551615").unwrap().get(), u64::MAX);
}

#[test]
fn test_not_an_integer() {
    assert_eq!(parse_start("abc"), Err(InputError::NotAnInteger("abc".into())));
    assert!(matches!(parse_start(""), Err(InputError::NotAnInteger(_))));
    assert!(matches!(parse_start("4.5"), Err(InputError::NotAnInteger(_))));
    assert!(matches!(parse_start("1 2"), Err(InputError::NotAnInteger(_))));
}

#[test]
fn test_not_positive() {
    assert_eq!(parse_start("0"), Err(InputError::NotPositive));
    assert_eq!(parse_start("-5"), Err(InputError::NotPositive));
    assert_eq!(
        parse_start("-999999999999999999999999999999999999999999"),
        Err(InputError::NotPositive)
    );
    assert_eq!(
        InputError::NotPositive.to_string(),
        "Number must be a positive integer."
    );
}

#[test]
fn test_too_large() {
    assert_eq!(parse_start("18446744073709551616"), Err(InputError::TooLarge));
    assert_eq!(
        parse_start("999999999999999999999999999999999999999999"),
        Err(InputError::TooLarge)
    );
}

#[test]
fn test_dialog_title() {
    assert_eq!(InputError::NotPositive.title(), "Input Error");
    assert_eq!(InputError::NotAnInteger("x".into()).title(), "Input Error");
}
