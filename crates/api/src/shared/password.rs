use actix_web::web;

pub const BCRYPT_COST: u32 = 10;

/// Hashes the password on the blocking thread pool
pub async fn hash_password(password: String) -> anyhow::Result<String> {
    let hash = web::block(move || bcrypt::hash(password, BCRYPT_COST)).await??;
    Ok(hash)
}

/// Checks the password against the hash on the blocking thread pool. A
/// malformed hash is treated like a wrong password.
pub async fn verify_password(password: String, hash: String) -> bool {
    matches!(
        web::block(move || bcrypt::verify(password, &hash)).await,
        Ok(Ok(true))
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[actix_web::test]
    async fn it_verifies_hashed_password() {
        let hash = hash_password("Sup3r$ecret".into()).await.unwrap();
        assert_ne!(hash, "Sup3r$ecret");
        assert!(verify_password("Sup3r$ecret".into(), hash.clone()).await);
        assert!(!verify_password("Wr0ng$ecret".into(), hash).await);
    }

    #[actix_web::test]
    async fn it_rejects_malformed_hash() {
        assert!(!verify_password("Sup3r$ecret".into(), "not-a-hash".into()).await);
    }
}
