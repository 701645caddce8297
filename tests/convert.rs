use basefmt::{Direction, Radix, convert};

fn assert_converts(input: &str, direction: Direction, radix: Option<Radix>, expected: &str) {
    match convert(input, direction, radix, false) {
        Ok(output) => assert_eq!(output, expected, "converting {input:?}"),
        Err(e) => panic!("converting {input:?} failed: {e}"),
    }
}

fn assert_failure(input: &str, direction: Direction, radix: Option<Radix>) {
    if convert(input, direction, radix, false).is_ok() {
        panic!("converting {input:?} succeeded but was expected to fail")
    }
}

#[test]
fn formats_decimal_input() {
    assert_converts("255", Direction::Format, None, "0b 1111 1111");
    assert_converts(" 255 ", Direction::Format, Some(Radix::Hexadecimal), "0x FF");
    assert_converts("255", Direction::Format, Some(Radix::Octal), "0o 377");
    assert_converts("-5", Direction::Format, Some(Radix::Binary), "-0b 0101");
}

#[test]
fn compat_flag_selects_legacy_rendering() {
    let output = convert("-5", Direction::Format, None, true).unwrap();
    assert_eq!(output, "0b b101");

    let output = convert("255", Direction::Format, Some(Radix::Hexadecimal), true).unwrap();
    assert_eq!(output, "0X FF");
}

#[test]
fn parses_to_decimal() {
    assert_converts("0b 1111 1111", Direction::Parse, None, "255");
    assert_converts("ff", Direction::Parse, Some(Radix::Hexadecimal), "255");
    assert_converts("-0o 10", Direction::Parse, None, "-8");
}

#[test]
fn bad_input_is_an_error() {
    assert_failure("0xFF", Direction::Format, None);
    assert_failure("", Direction::Format, None);
    assert_failure("zz", Direction::Parse, Some(Radix::Hexadecimal));
    assert_failure("101", Direction::Parse, None);
}

#[test]
fn radix_names() {
    for (name, radix) in [("bin", Radix::Binary),
                          ("BINARY", Radix::Binary),
                          ("8", Radix::Octal),
                          ("o", Radix::Octal),
                          ("hex", Radix::Hexadecimal),
                          ("x", Radix::Hexadecimal)]
    {
        assert_eq!(name.parse::<Radix>().unwrap(), radix, "radix name {name:?}");
    }

    let e = "decimal".parse::<Radix>().unwrap_err();
    assert_eq!(e.to_string(), "Unknown radix \"decimal\"; expected bin, oct or hex.");
}
