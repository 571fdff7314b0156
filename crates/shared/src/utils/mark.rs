/// Watermarks a card number for display: first and last group kept, the
/// interior replaced with a fixed mask.
pub fn mask_card_number(number: &str) -> String {
    let len = number.len();
    if len < 8 {
        "****".to_string()
    } else {
        let prefix = &number[..4];
        let suffix = &number[len - 4..];
        format!("{prefix}****{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_interior_digits() {
        assert_eq!(mask_card_number("4083969259636239"), "4083****6239");
    }

    #[test]
    fn short_input_is_fully_masked() {
        assert_eq!(mask_card_number("4083"), "****");
    }
}
