use super::{error::AvatarError, hash::hash_seed};

/// 1-based index into a numbered pool of `pool_size` images.
pub fn select_pool_index(seed: &str, pool_size: i64) -> Result<u64, AvatarError> {
    if pool_size <= 0 {
        return Err(AvatarError::invalid_argument(
            "pool size must be a positive integer",
        ));
    }

    Ok(hash_seed(seed) % pool_size as u64 + 1)
}

/// Pick one filename from a manifest list. `None` when the list is empty;
/// callers fall back to a default file instead of failing.
pub fn select_filename<'a, S>(seed: &str, files: &'a [S]) -> Option<&'a str>
where
    S: AsRef<str>,
{
    if files.is_empty() {
        return None;
    }

    let idx = hash_seed(seed) % files.len() as u64;
    Some(files[idx as usize].as_ref())
}
