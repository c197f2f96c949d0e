use log::{info, warn};

use crate::error::QuizError;
use crate::hash::compute_str_hash;

/// Digest of the shared admin secret.
const ADMIN_SECRET_DIGEST: &str =
    "sha256:44fdb88517692b4ca4cf47a23d7ba22f3b1771a15694dbc902af70a549cd3fb8";

pub fn check_secret(input: &str) -> Result<(), QuizError> {
    if compute_str_hash(input) == ADMIN_SECRET_DIGEST {
        info!("admin unlocked");
        Ok(())
    } else {
        warn!("admin login rejected");
        Err(QuizError::Auth)
    }
}
