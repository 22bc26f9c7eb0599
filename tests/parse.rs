use float_lit::*;

fn check32(text: &str, expected: f32) {
    let bits = parse_f32_bits(text).unwrap();
    assert_eq!(
        bits,
        expected.to_bits(),
        "parsing {:?}: got {:#010x}, expected {:#010x}",
        text,
        bits,
        expected.to_bits()
    );
}

fn check32_bits(text: &str, expected: u32) {
    let bits = parse_f32_bits(text).unwrap();
    assert_eq!(
        bits, expected,
        "parsing {:?}: got {:#010x}, expected {:#010x}",
        text, bits, expected
    );
}

fn check64(text: &str, expected: f64) {
    let bits = parse_f64_bits(text).unwrap();
    assert_eq!(
        bits,
        expected.to_bits(),
        "parsing {:?}: got {:#018x}, expected {:#018x}",
        text,
        bits,
        expected.to_bits()
    );
}

#[test]
fn signed_zero() {
    check32_bits("0", 0x0000_0000);
    check32_bits("+0", 0x0000_0000);
    check32_bits("-0", 0x8000_0000);
    check32_bits("-0.0e10", 0x8000_0000);
    check64("0x0p0", 0.0);
    check64("-0x0p0", -0.0);
}

#[test]
fn small_integers_and_fractions() {
    check32("1", 1.0);
    check32("2", 2.0);
    check32("42", 42.0);
    check32("1.5", 1.5);
    check32("0.25", 0.25);
    check64("1", 1.0);
    check64("2.5", 2.5);
    check64("0.1", 0.1);
    check64("3.141592653589793", std::f64::consts::PI);
}

#[test]
fn known_bit_patterns() {
    check32_bits("1", 0x3F80_0000);
    assert_eq!(parse_f64_bits("1").unwrap(), 0x3FF0_0000_0000_0000);
    check64("0x1.8p3", 12.0);
}

#[test]
fn powers_of_two_hex() {
    check32("0x1p-100", 2.0f32.powi(-100));
    check32("0x1p100", 2.0f32.powi(100));
    check64("0x1p-100", 2.0f64.powi(-100));
    check64("0x1p1000", 2.0f64.powi(1000));
}

#[test]
fn halfway_rounds_to_even() {
    // exactly halfway between 1 and the next binary32 value
    check32("1.000000059604644775390625", 1.0);
    check32("0x1.000001p0", 1.0);
}

#[test]
fn slightly_below_halfway_rounds_down() {
    check32("1.000000059604644775390624", 1.0);
    check32("0x1.0000008p0", 1.0);
    check32("0x1.000000fp0", 1.0);
}

#[test]
fn slightly_above_halfway_rounds_up() {
    check32("1.000000059604644775390626", 1.0000001);
    check32("0x1.000002p0", 1.0000001);
    check32("0x1.0000018p0", 1.0000001);
    check32("0x1.0000011p0", 1.0000001);
}

#[test]
fn rounding_reads_all_the_way_to_the_end() {
    // above halfway, but only the final digit says so
    check32(
        "1.00000005960464477539062500000000000000000000000000000000000000000000000000000000000000000000000000000000000000001",
        1.0000001,
    );
    check32(
        "0x1.0000010000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001p0",
        1.0000001,
    );
}

#[test]
fn largest_finite_binary32() {
    // (1 << 128) * (1 - 2^-24)
    check32("340282346638528859811704183484516925440", f32::MAX);
    check32("-340282346638528859811704183484516925440", -f32::MAX);
    check32("0x.ffffffp128", f32::MAX);
    check32("-0x.ffffffp128", -f32::MAX);
}

#[test]
fn borderline_below_overflow_stays_finite() {
    // the overflow border is 3.40282356779...e+38
    check32("3.402823567e38", f32::MAX);
    check32("-3.402823567e38", -f32::MAX);
    check32("0x.ffffff7fp128", f32::MAX);
    check32("-0x.ffffff7fp128", -f32::MAX);
}

#[test]
fn overflow_rounds_to_signed_infinity() {
    check32("3.4028236e38", f32::INFINITY);
    check32("-3.4028236e38", f32::NEG_INFINITY);
    check32("1e39", f32::INFINITY);
    check32("0x1p128", f32::INFINITY);
    check32("1e100000000000000000000", f32::INFINITY);
    check64("1.8e308", f64::INFINITY);
    check64("-1.8e308", f64::NEG_INFINITY);
    check64("0x1p1024", f64::INFINITY);
}

#[test]
fn largest_finite_binary64() {
    check64("1.7976931348623157e308", f64::MAX);
    check64("0x1.fffffffffffffp1023", f64::MAX);
}

#[test]
fn binary32_subnormals() {
    check32("1e-38", 1e-38);
    check32("1e-39", 1e-39);
    check32("1e-40", 1e-40);
    check32("1e-41", 1e-41);
    check32("1e-42", 1e-42);
    check32("1e-43", 1e-43);
    check32("1e-44", 1e-44);
    check32("6e-45", 6e-45); // 4p-149 = 5.6e-45
    check32("5e-45", 6e-45);
}

#[test]
fn smallest_binary32_subnormal() {
    check32("1e-45", 1e-45); // 1p-149 = 1.4e-45
    check32("2e-45", 1e-45);
    check32("3e-45", 3e-45);
    check32_bits("0x1p-149", 0x0000_0001);
}

#[test]
fn binary32_subnormal_bit_patterns() {
    check32_bits("0x0.89aBcDp-125", 0x0089_abcd);
    check32_bits("0x0.8000000p-125", 0x0080_0000);
    check32_bits("0x0.1234560p-125", 0x0012_3456);
    check32_bits("0x0.1234567p-125", 0x0012_3456); // rounded down
    check32_bits("0x0.1234568p-125", 0x0012_3456); // rounded down
    check32_bits("0x0.1234569p-125", 0x0012_3457); // rounded up
    check32_bits("0x0.1234570p-125", 0x0012_3457);
    check32_bits("0x0.0000010p-125", 0x0000_0001);
    check32_bits("0x0.00000081p-125", 0x0000_0001); // rounded up
}

#[test]
fn half_of_smallest_subnormal_ties_to_zero() {
    // exactly half of 1p-149: the tie rounds to the even neighbor, zero
    check32_bits("0x0.0000008p-125", 0x0000_0000);
    check32_bits("0x0.0000007p-125", 0x0000_0000); // below half
    check32_bits("0x1p-150", 0x0000_0000);
    check32_bits("-0x1p-150", 0x8000_0000);
    check32("1e-100000000000000000000", 0.0);
}

#[test]
fn binary64_subnormals() {
    check64("5e-324", f64::from_bits(1)); // smallest positive subnormal
    check64("0x1p-1074", f64::from_bits(1));
    check64("2.5e-324", f64::from_bits(1)); // above half of 1p-1074
    check64("2e-324", 0.0); // below half of 1p-1074
    check64("0x1p-1075", 0.0); // exactly half: tie to even
    check64("1e-310", 1e-310);
}

#[test]
fn exact_power_of_two_needing_eight_digits() {
    // 2^92 = 8388608p+69; the previous binary32 is 16777215p+68 and the
    // halfway point is 4.951760009...e27, so all eight digits matter
    check32("4951760157141521099596496896", 2.0f32.powi(92));
}

#[test]
fn sign_preservation() {
    for text in ["1.5", "0.1", "3e20", "1e-42", "0x1.8p3"] {
        let positive = parse_f32_bits(text).unwrap();
        let negated = parse_f32_bits(&format!("-{}", text)).unwrap();
        assert_eq!(
            negated,
            positive | 0x8000_0000,
            "sign bit mismatch for {:?}",
            text
        );
        assert_eq!(positive & 0x8000_0000, 0, "sign bit set for {:?}", text);
    }
}

#[test]
fn underscore_and_padding_equivalence() {
    let canonical = parse_f32_bits("42").unwrap();
    for text in ["000042.0000", "42.000_000", "4_2", "42e0", "4.2e1", "420e-1"] {
        assert_eq!(
            parse_f32_bits(text).unwrap(),
            canonical,
            "parsing {:?}",
            text
        );
    }
}

#[test]
fn convenience_entry_points() {
    assert_eq!(parse_f32("1.5").unwrap(), 1.5f32);
    assert_eq!(parse_f64("1.5").unwrap(), 1.5f64);
    assert!(parse_f64("-0").unwrap().is_sign_negative());
}

#[test]
fn syntax_errors_surface_from_entry_points() {
    assert_eq!(parse_f32_bits(""), Err(LiteralError::Empty));
    assert_eq!(parse_f64_bits(""), Err(LiteralError::Empty));
    assert_eq!(parse_f32_bits("0x1"), Err(LiteralError::MissingExponent));
    assert_eq!(parse_f64_bits("0b101"), Err(LiteralError::UnexpectedChar { at: 1, ch: 'b' }));
    assert_eq!(
        parse_f64_bits("1.2.3"),
        Err(LiteralError::DuplicatePoint { at: 3 })
    );
}
