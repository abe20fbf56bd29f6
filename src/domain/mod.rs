//! Domain layer: strong types with validation and invariants (no I/O).

mod validation;
mod value;

pub use validation::{NormalizeError, ValidationError};
pub use value::{Contact, E164Phone, PhoneNumber};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_number_rejects_empty_input() {
        assert!(matches!(
            PhoneNumber::parse(None, "   "),
            Err(ValidationError::Empty { field: "phone" })
        ));
    }

    #[test]
    fn e164_phone_from_generic_parse_round_trips() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::AO), "923456789").unwrap();
        let e164: E164Phone = pn.into();
        assert_eq!(e164.as_str(), "+244923456789");
        assert_eq!(e164.local(), "923456789");
    }
}
