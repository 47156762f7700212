//! Digit-level arithmetic.

use kata_common::InvalidArgument;

/// Decimal digits of `n`, most significant first.
fn decimal_digits(n: u64) -> impl Iterator<Item = u64> {
    n.to_string()
        .into_bytes()
        .into_iter()
        .map(|b| u64::from(b - b'0'))
}

/// `n!` for `n >= 1`.
///
/// # Errors
/// `n == 0` is outside the exercise's domain, and `n > 20` does not fit in
/// a `u64`.
pub fn get_factorial(n: u64) -> Result<u64, InvalidArgument> {
    if n == 0 {
        return Err(InvalidArgument::new("n", "factorial is defined here for n >= 1"));
    }
    (1..=n)
        .try_fold(1u64, u64::checked_mul)
        .ok_or_else(|| InvalidArgument::new("n", format!("{n}! overflows u64")))
}

/// Sum of all integers between `a` and `b`, both inclusive, in either order.
///
/// Uses the arithmetic series formula in `i128`, so any range is constant
/// time and the intermediate product cannot overflow.
///
/// # Errors
/// The sum does not fit in an `i64`.
pub fn get_sum_between_numbers(a: i64, b: i64) -> Result<i64, InvalidArgument> {
    let (low, high) = (i128::from(a.min(b)), i128::from(a.max(b)));
    let sum = (low + high) * (high - low + 1) / 2;
    i64::try_from(sum)
        .map_err(|_| InvalidArgument::new("b", format!("sum of {low}..={high} overflows i64")))
}

/// Reverse the decimal digits of `n`, keeping its sign.
///
/// Leading zeros of the reversed digits vanish: `1200` becomes `21`.
///
/// # Errors
/// The reversed magnitude does not fit in an `i64`.
pub fn reverse_integer(n: i64) -> Result<i64, InvalidArgument> {
    let reversed: String = n.unsigned_abs().to_string().chars().rev().collect();
    let magnitude: i64 = reversed
        .parse()
        .map_err(|_| InvalidArgument::new("n", format!("reversed digits {reversed} overflow i64")))?;
    Ok(if n < 0 { -magnitude } else { magnitude })
}

/// Luhn checksum over the decimal digits of `number`.
///
/// ```
/// assert!(kata_loops::is_credit_card_number(79_927_398_713));
/// assert!(!kata_loops::is_credit_card_number(4_571_234_567_890_111));
/// ```
#[must_use]
pub fn is_credit_card_number(number: u64) -> bool {
    let digits: Vec<u64> = decimal_digits(number).collect();
    let sum: u64 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(position, &digit)| {
            if position % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();
    sum % 10 == 0
}

/// Sum the digits repeatedly until one digit remains.
#[must_use]
pub fn get_digital_root(n: u64) -> u64 {
    let mut current = n;
    while current >= 10 {
        current = decimal_digits(current).sum();
    }
    current
}

/// Representation of `n` in base `radix`.
///
/// ```
/// assert_eq!(kata_loops::to_nary_string(365, 3)?, "111112");
/// # Ok::<(), kata_loops::InvalidArgument>(())
/// ```
///
/// # Errors
/// `radix` outside `2..=10`.
pub fn to_nary_string(n: u64, radix: u32) -> Result<String, InvalidArgument> {
    if !(2..=10).contains(&radix) {
        return Err(InvalidArgument::new(
            "radix",
            format!("radix {radix} is outside 2..=10"),
        ));
    }

    let base = u64::from(radix);
    let mut digits = String::new();
    let mut rest = n;
    loop {
        digits.push_str(&(rest % base).to_string());
        rest /= base;
        if rest == 0 {
            break;
        }
    }
    Ok(digits.chars().rev().collect())
}
