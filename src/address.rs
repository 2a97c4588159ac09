//! Offline address sanity checks.
//!
//! These only look at the shape of the string. Whether an address actually
//! exists is for a [`Geocoder`](crate::traits::Geocoder) to decide.

/// Minimum trimmed length of a usable address.
const MIN_ADDRESS_LEN: usize = 5;

/// An address needs some length and at least a street and a city part
/// separated by a comma.
pub fn validate_address(address: &str) -> bool {
    if address.trim().chars().count() < MIN_ADDRESS_LEN {
        return false;
    }

    address.split(',').count() >= 2
}

/// True when a digit follows a comma or whitespace, e.g. `"Via Roma, 12"`.
pub fn has_street_number(address: &str) -> bool {
    let mut previous = None;
    for ch in address.chars() {
        if ch.is_ascii_digit() && previous.is_some_and(|p: char| p == ',' || p.is_whitespace()) {
            return true;
        }
        previous = Some(ch);
    }
    false
}

/// Adds `street_number` to an address that lacks one.
///
/// The number goes before the first comma, or at the end when there is no
/// comma. Addresses that already carry a number, or calls with an empty
/// number, come back unchanged.
pub fn format_address(address: &str, street_number: Option<&str>) -> String {
    if has_street_number(address) {
        return address.to_string();
    }

    match street_number {
        Some(number) if !number.is_empty() => match address.find(',') {
            Some(comma) if comma > 0 => {
                format!("{}, {}{}", &address[..comma], number, &address[comma..])
            }
            _ => format!("{}, {}", address, number),
        },
        _ => address.to_string(),
    }
}
