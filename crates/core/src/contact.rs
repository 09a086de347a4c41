//! Contact message validation and the phone input mask.

use regex::Regex;
use serde::Serialize;

/// A name must be longer than this many characters.
pub const NAME_MIN_LEN: usize = 2;

/// Length of a fully masked phone number, `+7 (XXX) XXX XXXX`.
pub const PHONE_MASK_LEN: usize = 17;

const PHONE_MATRIX: &str = "+7 (___) ___ ____";
const EMAIL_PATTERN: &str = r"^.+@[^.].*\.[a-z]{2,}$";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("name must be longer than {NAME_MIN_LEN} characters")]
    NameTooShort,

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("phone number is incomplete")]
    IncompletePhone,
}

/// A contact message composed from user input.
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub comment: String,
}

impl ContactMessage {
    /// Check fields in form order and report the first failure. The comment
    /// is free text and carries no rule.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.chars().count() <= NAME_MIN_LEN {
            return Err(ContactError::NameTooShort);
        }

        let email = Regex::new(EMAIL_PATTERN).unwrap();
        if !email.is_match(&self.email) {
            return Err(ContactError::InvalidEmail);
        }

        if self.phone.chars().count() != PHONE_MASK_LEN {
            return Err(ContactError::IncompletePhone);
        }

        Ok(())
    }

    pub fn summary(&self) -> String {
        format!(
            "Sent name: {}\nSent email: {}\nSent phone: {}\nSent comment: {}",
            self.name, self.email, self.phone, self.comment
        )
    }
}

/// Overlay the digits of `input` onto the `+7 (___) ___ ____` matrix.
///
/// The matrix's own `7` consumes an input digit just like the blank slots,
/// so a full Russian number including the country code fills the mask
/// exactly. Incomplete input is cut at the first unfilled slot; input that
/// contributes no digit past the country code collapses to the bare `+7 `
/// prefix.
pub fn format_phone(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(char::is_ascii_digit).collect();

    let mut consumed = 0;
    let mut masked: String = PHONE_MATRIX
        .chars()
        .map(|slot| {
            if slot == '_' || slot.is_ascii_digit() {
                if consumed < digits.len() {
                    let digit = digits[consumed];
                    consumed += 1;
                    digit
                } else {
                    slot
                }
            } else {
                slot
            }
        })
        .collect();

    if let Some(unfilled) = masked.find('_') {
        let cut = if unfilled < 5 { 3 } else { unfilled };
        masked.truncate(cut);
    }

    masked
}
