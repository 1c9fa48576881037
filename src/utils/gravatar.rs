use sha2::{Digest, Sha256};

pub fn gravatar_url(email: &str) -> String {
    let digest = Sha256::digest(email.trim().to_lowercase().as_bytes());
    format!(
        "http://www.gravatar.com/avatar/{}?d=mm&s=120",
        hex::encode(digest)
    )
}
