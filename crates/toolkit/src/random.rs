use rand::Rng;

const RANDOM_STRING_SOURCE: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_+";

/// Generate `length` random characters from `[a-zA-Z0-9_+]`.
pub fn random_string(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let index = rng.random_range(0..RANDOM_STRING_SOURCE.len());
            char::from(RANDOM_STRING_SOURCE[index])
        })
        .collect()
}
