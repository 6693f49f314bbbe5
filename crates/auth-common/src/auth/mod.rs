//! Password hashing and token signing

mod jwt;
mod password;

pub use jwt::{Claims, JwtService, EXPIRY_CLAIM};
pub use password::PasswordService;
