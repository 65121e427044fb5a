use crate::artifacts::index::CHECKSUM_SIZE;
use sha1::{Digest, Sha1};

/// Split `data` into body and trailer, checking the trailer is the SHA-1 of
/// the body.
pub fn verified_body(data: &[u8]) -> anyhow::Result<&[u8]> {
    if data.len() < CHECKSUM_SIZE {
        anyhow::bail!("index file is too short for a checksum");
    }

    let (body, trailer) = data.split_at(data.len() - CHECKSUM_SIZE);
    let digest = Sha1::digest(body);

    if digest.as_slice() != trailer {
        anyhow::bail!("index checksum does not match its contents");
    }

    Ok(body)
}
