//! Random code generation

use rand::Rng;

use crate::constants::INVITE_CODE_LENGTH;

/// Uppercase letters and digits, without characters that read alike
const INVITE_CODE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Generate a random quiz invite code
pub fn generate_invite_code() -> String {
    let mut rng = rand::rng();

    (0..INVITE_CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..INVITE_CODE_CHARSET.len());
            INVITE_CODE_CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invite_code_shape() {
        let code = generate_invite_code();

        assert_eq!(code.len(), INVITE_CODE_LENGTH);
        assert!(code.bytes().all(|b| INVITE_CODE_CHARSET.contains(&b)));
    }

    #[test]
    fn test_invite_codes_differ() {
        let first = generate_invite_code();
        let second = generate_invite_code();

        assert_ne!(first, second);
    }
}
