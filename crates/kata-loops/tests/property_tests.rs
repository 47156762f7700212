//! Property tests against closed forms.

use kata_loops::{
    FizzBuzz, get_digital_root, get_fizz_buzz, get_sum_between_numbers, is_brackets_balanced,
    reverse_string,
};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn prop_sum_between_matches_formula(a: i32, b: i32) -> bool {
    let (low, high) = (i128::from(a.min(b)), i128::from(a.max(b)));
    let expected = (low + high) * (high - low + 1) / 2;
    get_sum_between_numbers(i64::from(a), i64::from(b)).ok().map(i128::from) == Some(expected)
}

#[quickcheck]
fn prop_sum_between_is_symmetric_and_never_panics(a: i64, b: i64) -> bool {
    let low = i128::from(a.min(b));
    let high = i128::from(a.max(b));
    let expected = i64::try_from((low + high) * (high - low + 1) / 2).ok();
    let forward = get_sum_between_numbers(a, b).ok();
    forward == expected && forward == get_sum_between_numbers(b, a).ok()
}

#[quickcheck]
fn prop_digital_root_closed_form(n: u64) -> bool {
    let expected = if n == 0 { 0 } else { 1 + (n - 1) % 9 };
    get_digital_root(n) == expected
}

#[quickcheck]
fn prop_reverse_string_is_involution(s: String) -> bool {
    reverse_string(&reverse_string(&s)) == s
}

#[quickcheck]
fn prop_nested_brackets_balance(depth: u8) -> bool {
    let depth = usize::from(depth % 32);
    let text = format!("{}{}", "([{<".repeat(depth), ">}])".repeat(depth));
    is_brackets_balanced(&text)
}

#[quickcheck]
fn prop_fizz_buzz_number_only_when_coprime(n: u64) -> bool {
    match get_fizz_buzz(n) {
        FizzBuzz::Number(m) => m == n && n % 3 != 0 && n % 5 != 0,
        FizzBuzz::Fizz => n % 3 == 0 && n % 5 != 0,
        FizzBuzz::Buzz => n % 5 == 0 && n % 3 != 0,
        FizzBuzz::FizzBuzz => n % 15 == 0,
    }
}
