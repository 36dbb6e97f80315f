//! Identity and confirmation-code generation.

use rand::Rng;
use uuid::Uuid;

/// Base-36 alphabet, uppercased for readability over the phone.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const CONFIRMATION_CODE_LEN: usize = 8;

/// Collision-resistant identity for clinics, services and appointments.
pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// Opaque token handed to the customer on booking. Drawn from the thread
/// RNG so codes are not guessable from sequence; 8 base-36 characters give
/// ~41 bits of entropy, plenty for a per-clinic confirmation token.
pub fn confirmation_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CONFIRMATION_CODE_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_has_expected_shape() {
        let code = confirmation_code();
        assert_eq!(code.len(), CONFIRMATION_CODE_LEN);
        assert!(code.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn codes_are_not_sequential() {
        let a = confirmation_code();
        let b = confirmation_code();
        assert_ne!(a, b);
    }
}
