//! # 密码哈希与校验

use crate::error::Result;

/// 生产环境使用的 bcrypt cost
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// 密码哈希与比对
pub trait PasswordVerifier: Send + Sync {
    fn hash(&self, plain: &str) -> Result<String>;

    /// 哈希格式损坏时返回 false
    fn verify(&self, plain: &str, hash: &str) -> bool;
}

#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordVerifier {
    cost: u32,
}

impl BcryptPasswordVerifier {
    #[must_use]
    pub const fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordVerifier {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordVerifier for BcryptPasswordVerifier {
    fn hash(&self, plain: &str) -> Result<String> {
        Ok(bcrypt::hash(plain, self.cost)?)
    }

    fn verify(&self, plain: &str, hash: &str) -> bool {
        bcrypt::verify(plain, hash).unwrap_or(false)
    }
}
