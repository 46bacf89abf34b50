/// Country code assumed for numbers given without one
pub const DEFAULT_COUNTRY_CODE: &str = "91";

const DOMESTIC_NUMBER_LEN: usize = 10;
const INTERNATIONAL_NUMBER_LEN: usize = DOMESTIC_NUMBER_LEN + DEFAULT_COUNTRY_CODE.len();

fn digits_of(phone_number: &str) -> String {
    phone_number.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Turns a user provided phone number into the international format expected by
/// the sms provider.
///
/// Numbers already starting with `+` are trusted as they are. Everything else is
/// assumed to be a domestic number and gets the `DEFAULT_COUNTRY_CODE` prefix
/// unless it already carries it. This is best effort and does not validate the
/// number, use `is_valid_phone_number` for that. Returns `None` for empty input.
pub fn normalize_phone_number(phone_number: &str) -> Option<String> {
    if phone_number.is_empty() {
        return None;
    }
    if phone_number.starts_with('+') {
        return Some(phone_number.to_string());
    }

    let digits = digits_of(phone_number);
    if digits.len() == INTERNATIONAL_NUMBER_LEN && digits.starts_with(DEFAULT_COUNTRY_CODE) {
        return Some(format!("+{}", digits));
    }

    Some(format!("+{}{}", DEFAULT_COUNTRY_CODE, digits))
}

/// Accepts a 10 digit domestic number, a 12 digit number starting with the
/// `DEFAULT_COUNTRY_CODE` or anything starting with `+`.
pub fn is_valid_phone_number(phone_number: &str) -> bool {
    if phone_number.is_empty() {
        return false;
    }
    if phone_number.starts_with('+') {
        return true;
    }

    let digits = digits_of(phone_number);
    digits.len() == DOMESTIC_NUMBER_LEN
        || (digits.len() == INTERNATIONAL_NUMBER_LEN && digits.starts_with(DEFAULT_COUNTRY_CODE))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_prefixes_domestic_numbers_with_country_code() {
        assert_eq!(
            normalize_phone_number("9876543210"),
            Some("+919876543210".to_string())
        );
        assert_eq!(
            normalize_phone_number("98765-43210"),
            Some("+919876543210".to_string())
        );
        assert_eq!(
            normalize_phone_number("(987) 654 3210"),
            Some("+919876543210".to_string())
        );
    }

    #[test]
    fn it_adds_plus_to_numbers_with_country_code() {
        assert_eq!(
            normalize_phone_number("919876543210"),
            Some("+919876543210".to_string())
        );
        assert_eq!(
            normalize_phone_number("91 98765 43210"),
            Some("+919876543210".to_string())
        );
    }

    #[test]
    fn it_keeps_numbers_starting_with_plus() {
        assert_eq!(
            normalize_phone_number("+1234567890"),
            Some("+1234567890".to_string())
        );
        assert_eq!(
            normalize_phone_number("+919876543210"),
            Some("+919876543210".to_string())
        );
        assert_eq!(
            normalize_phone_number("+91 9876 543 210"),
            Some("+91 9876 543 210".to_string())
        );
    }

    #[test]
    fn it_falls_back_to_country_code_prefix() {
        assert_eq!(
            normalize_phone_number("98765432"),
            Some("+9198765432".to_string())
        );
        // 12 digits but another country code
        assert_eq!(
            normalize_phone_number("449876543210"),
            Some("+91449876543210".to_string())
        );
    }

    #[test]
    fn it_rejects_empty_number() {
        assert_eq!(normalize_phone_number(""), None);
    }

    #[test]
    fn it_validates_phone_numbers() {
        let valid = vec![
            "9876543210",
            "+919876543210",
            "919876543210",
            "+91 9876 543 210",
            "+1234567890",
            "987-654-3210",
        ];
        for number in valid {
            assert!(is_valid_phone_number(number), "{} should be valid", number);
        }

        let invalid = vec!["", "98765432", "449876543210", "abc", "98765432101"];
        for number in invalid {
            assert!(
                !is_valid_phone_number(number),
                "{} should be invalid",
                number
            );
        }
    }
}
