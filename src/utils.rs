use rand::RngExt;

/// Generates a random ID to let the server correlate the steps of one
/// file transfer.
///
/// This is NOT cryptographically secure. Uniqueness is not guaranteed
/// either; colliding IDs of concurrent transfers are the server's
/// problem to reject.
pub fn generate_transfer_id() -> u8 {
    rand::rng().random()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_id_covers_whole_range() {
        let mut seen = [false; 256];
        for _ in 0..100_000 {
            seen[usize::from(generate_transfer_id())] = true;
        }

        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn transfer_id_roughly_uniform() {
        let mut counts = [0u32; 256];
        for _ in 0..256_000 {
            counts[usize::from(generate_transfer_id())] += 1;
        }

        // mean is 1000 per bucket
        assert!(counts.iter().all(|&count| count > 500 && count < 1500));
    }
}
