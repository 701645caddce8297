use basefmt::{
    Formatter, Radix, parse_binary, parse_hex, parse_octal, parse_radix, to_binary, to_hex, to_octal,
};
use num_bigint::{BigInt, BigUint};
use proptest::prelude::*;

prop_compose! {
    fn arb_non_negative()(bytes in proptest::collection::vec(any::<u8>(), 0..40)) -> BigInt {
        BigInt::from(BigUint::from_bytes_be(&bytes))
    }
}

prop_compose! {
    fn arb_integer()(magnitude in arb_non_negative(), negative in any::<bool>()) -> BigInt {
        if negative { -magnitude } else { magnitude }
    }
}

fn arb_radix() -> impl Strategy<Value = Radix> {
    prop_oneof![Just(Radix::Binary), Just(Radix::Octal), Just(Radix::Hexadecimal)]
}

proptest! {
    #[test]
    fn non_negative_values_round_trip(n in arb_non_negative()) {
        prop_assert_eq!(parse_binary(&to_binary(n.clone())).unwrap(), n.clone());
        prop_assert_eq!(parse_hex(&to_hex(n.clone())).unwrap(), n.clone());
        prop_assert_eq!(parse_octal(&to_octal(n.clone())).unwrap(), n);
    }

    #[test]
    fn leading_sign_output_round_trips_for_every_integer(n in arb_integer(), radix in arb_radix()) {
        let rendered = Formatter::new(radix).format(&n);
        prop_assert_eq!(parse_radix(&rendered, radix).unwrap(), n);
    }

    #[test]
    fn binary_digits_come_in_whole_clusters(n in arb_non_negative()) {
        let rendered = to_binary(n.clone());
        let payload = rendered.strip_prefix("0b ").unwrap();

        prop_assert!(payload.split(' ').all(|cluster| cluster.len() == 4));

        let digits: String = payload.chars().filter(|c| *c != ' ').collect();
        prop_assert!(!digits.is_empty());
        prop_assert_eq!(digits.len() % 4, 0);

        let unpadded = digits.trim_start_matches('0');
        let expected = n.to_str_radix(2);
        prop_assert_eq!(if unpadded.is_empty() { "0" } else { unpadded }, expected.as_str());
    }

    #[test]
    fn extra_spaces_do_not_change_the_value(
        n in arb_non_negative(),
        radix in arb_radix(),
        widths in proptest::collection::vec(1_usize..4, 1..20),
    ) {
        let rendered = Formatter::new(radix).with_group_width(2).format(&n);
        let mut widths = widths.into_iter().cycle();
        let spaced: String = rendered.split(' ')
                                     .collect::<Vec<_>>()
                                     .join(&" ".repeat(widths.next().unwrap_or(1)));
        let leading = " ".repeat(widths.next().unwrap_or(0));
        let trailing = " ".repeat(widths.next().unwrap_or(0));
        let padded = format!("{leading}{spaced}{trailing}");

        prop_assert_eq!(parse_radix(&padded, radix).unwrap(), parse_radix(&rendered, radix).unwrap());
    }

    #[test]
    fn hex_parsing_ignores_case(n in arb_non_negative()) {
        let rendered = to_hex(n.clone());
        prop_assert_eq!(parse_hex(&rendered.to_lowercase()).unwrap(), n.clone());
        prop_assert_eq!(parse_hex(&rendered.to_uppercase()).unwrap(), n);
    }

    #[test]
    fn compat_matches_default_for_non_negative_binary_and_octal(n in arb_non_negative()) {
        prop_assert_eq!(Formatter::compat(Radix::Binary).format(&n), to_binary(n.clone()));
        prop_assert_eq!(Formatter::compat(Radix::Octal).format(&n), to_octal(n.clone()));
        prop_assert_eq!(Formatter::compat(Radix::Hexadecimal).format(&n), to_hex(n).to_uppercase());
    }
}
