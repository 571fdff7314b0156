use crate::domain::CardType;
use rand::{Rng, rng};
use regex::Regex;
use std::sync::OnceLock;

const CARD_NUMBER_LEN: usize = 16;

fn number_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(r"^\d{16}$").expect("valid regex"))
}

/// Luhn check digit for a run of digits.
fn luhn_check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let mut d = u32::from(d);
            if i % 2 == 0 {
                d *= 2;
                if d > 9 {
                    d -= 9;
                }
            }
            d
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}

fn luhn_valid(digits: &[u8]) -> bool {
    let (body, check) = match digits.split_last() {
        Some((last, body)) => (body, *last),
        None => return false,
    };

    luhn_check_digit(body) == check
}

/// Emits a fresh 16-digit card number under the issuing BIN of the given
/// network, with a valid Luhn check digit. Uniqueness is the caller's
/// concern (the repository enforces it).
pub fn generate_card_number(card_type: CardType) -> String {
    let mut rng = rng();

    let mut digits: Vec<u8> = card_type
        .bin()
        .bytes()
        .map(|b| b - b'0')
        .collect();

    while digits.len() < CARD_NUMBER_LEN - 1 {
        digits.push(rng.random_range(0..10));
    }

    digits.push(luhn_check_digit(&digits));

    digits.iter().map(|d| (d + b'0') as char).collect()
}

/// Infers the issuing network from the BIN prefix, if the number was
/// emitted by this bank.
pub fn card_type_of_number(number: &str) -> Option<CardType> {
    CardType::ALL
        .into_iter()
        .find(|ty| number.starts_with(ty.bin()))
}

/// Checks that a card number could have been emitted by this bank: right
/// length, digits only, a known issuing BIN and a valid Luhn check digit.
/// Fails closed on anything malformed.
pub fn check_card_emitter(number: &str) -> bool {
    if !number_shape().is_match(number) {
        return false;
    }

    if card_type_of_number(number).is_none() {
        return false;
    }

    let digits: Vec<u8> = number.bytes().map(|b| b - b'0').collect();
    luhn_valid(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_numbers_pass_the_emitter_check() {
        for ty in CardType::ALL {
            let number = generate_card_number(ty);

            assert_eq!(number.len(), 16);
            assert!(number.starts_with(ty.bin()));
            assert!(check_card_emitter(&number), "rejected {number}");
            assert_eq!(card_type_of_number(&number), Some(ty));
        }
    }

    #[test]
    fn wrong_length_fails_closed() {
        assert!(!check_card_emitter(""));
        assert!(!check_card_emitter("4083"));
        assert!(!check_card_emitter("40839600000000181"));
    }

    #[test]
    fn non_digits_fail_closed() {
        assert!(!check_card_emitter("4083 9600 0000 18"));
        assert!(!check_card_emitter("408396000000001x"));
    }

    #[test]
    fn unknown_bin_fails_closed() {
        // Luhn-valid but not a BIN this bank emits.
        assert!(!check_card_emitter("9999999999999995"));
    }

    #[test]
    fn bad_check_digit_fails_closed() {
        let mut number = generate_card_number(CardType::Visa).into_bytes();
        let last = number.last_mut().unwrap();
        *last = if *last == b'9' { b'0' } else { *last + 1 };
        let number = String::from_utf8(number).unwrap();

        assert!(!check_card_emitter(&number));
    }
}
