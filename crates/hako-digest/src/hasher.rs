use digest::Digest;

/// Incremental hashing interface shared by digests and plain checksums.
pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self) -> Vec<u8>;
}

/// Adapter for any RustCrypto digest (MD5, SHA-1, SHA-2 family).
pub struct DigestHasher<D: Digest + Send>(D);

impl<D: Digest + Send> DigestHasher<D> {
    pub fn new() -> Self { Self(D::new()) }

    /// One-shot digest of a byte slice.
    pub fn digest(data: &[u8]) -> Vec<u8> { D::digest(data).to_vec() }
}

impl<D: Digest + Send> Default for DigestHasher<D> {
    fn default() -> Self { Self::new() }
}

impl<D: Digest + Send> Hasher for DigestHasher<D> {
    fn update(&mut self, data: &[u8]) { self.0.update(data); }
    fn finalize(self) -> Vec<u8> { self.0.finalize().to_vec() }
}

/// Adler-32 behind the same interface. The sum's four bytes come out
/// big-endian, matching its canonical rendering.
pub struct Adler32Hasher(adler2::Adler32);

impl Adler32Hasher {
    pub fn new() -> Self { Self(adler2::Adler32::new()) }
}

impl Default for Adler32Hasher {
    fn default() -> Self { Self::new() }
}

impl Hasher for Adler32Hasher {
    fn update(&mut self, data: &[u8]) { self.0.write_slice(data); }
    fn finalize(self) -> Vec<u8> { self.0.checksum().to_be_bytes().to_vec() }
}

/// CRC-32 (IEEE) behind the same interface.
pub struct Crc32Hasher(crc32fast::Hasher);

impl Crc32Hasher {
    pub fn new() -> Self { Self(crc32fast::Hasher::new()) }
}

impl Default for Crc32Hasher {
    fn default() -> Self { Self::new() }
}

impl Hasher for Crc32Hasher {
    fn update(&mut self, data: &[u8]) { self.0.update(data); }
    fn finalize(self) -> Vec<u8> { self.0.finalize().to_be_bytes().to_vec() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_known_vector() {
        let mut hasher = DigestHasher::<sha2::Sha256>::new();
        hasher.update(b"hello world");
        let hash = hasher.finalize();

        let expected =
            hex::decode("b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9")
                .unwrap();
        assert_eq!(hash, expected);
    }

    #[test]
    fn update_is_incremental() {
        let mut split = DigestHasher::<sha2::Sha256>::new();
        split.update(b"hello ");
        split.update(b"world");
        assert_eq!(split.finalize(), DigestHasher::<sha2::Sha256>::digest(b"hello world"));
    }

    #[test]
    fn crc32_check_value() {
        let mut hasher = Crc32Hasher::new();
        hasher.update(b"123456789");
        assert_eq!(hasher.finalize(), hex::decode("cbf43926").unwrap());
    }

    #[test]
    fn adler32_check_value() {
        let mut hasher = Adler32Hasher::new();
        hasher.update(b"123456789");
        assert_eq!(hasher.finalize(), hex::decode("091e01de").unwrap());
    }

    #[test]
    fn adler32_of_nothing_is_one() {
        assert_eq!(Adler32Hasher::new().finalize(), vec![0, 0, 0, 1]);
    }
}
