use crate::abstract_trait::hashing::HashingTrait;
use crate::errors::ServiceError;
use async_trait::async_trait;
use bcrypt::{DEFAULT_COST, hash, verify};

#[derive(Debug, Clone, Default)]
pub struct Hashing;

impl Hashing {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HashingTrait for Hashing {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        let hashed = hash(password, DEFAULT_COST)?;

        Ok(hashed)
    }

    async fn compare_password(&self, hashed: &str, password: &str) -> Result<bool, ServiceError> {
        let matched = verify(password, hashed)?;

        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_and_compare() {
        let hashing = Hashing::new();
        let hashed = hashing.hash_password("123").await.unwrap();

        assert!(hashing.compare_password(&hashed, "123").await.unwrap());
        assert!(!hashing.compare_password(&hashed, "456").await.unwrap());
    }
}
