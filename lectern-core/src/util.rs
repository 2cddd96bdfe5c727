use rand::{distributions::Alphanumeric, thread_rng, Rng};

pub fn random_string(length: usize) -> String {
    let mut rng = thread_rng();

    std::iter::repeat(())
        .map(|_| rng.sample(Alphanumeric) as char)
        .take(length)
        .collect()
}

/// Random lowercase hex characters, for room token suffixes
pub fn random_hex(length: usize) -> String {
    let mut bytes = vec![0u8; length.div_ceil(2)];
    thread_rng().fill(bytes.as_mut_slice());

    let mut encoded = hex::encode(bytes);
    encoded.truncate(length);
    encoded
}
