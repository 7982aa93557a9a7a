//! JWT 校验工具
//!
//! 令牌由外部身份服务签发（共享密钥），本服务只做校验并
//! 还原出显式的 Actor。签发函数仅用于测试与本地调试。

use actix_web::HttpRequest;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::models::users::entities::{Actor, UserRole};

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,  // Subject (user ID)
    pub role: String, // 用户角色
    pub exp: usize,   // Expiration time (时间戳)
    pub iat: usize,   // Issued at (签发时间)
}

pub struct JwtUtils;

impl JwtUtils {
    // 获取 JWT 密钥
    fn get_secret() -> String {
        AppConfig::get().jwt.secret.clone()
    }

    // 生成带自定义过期时间的 Token（测试与本地调试用）
    pub fn generate_token_with_expiry(
        user_id: i64,
        role: &str,
        expiry_duration: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = Claims {
            sub: user_id.to_string(),
            role: role.to_string(),
            exp: expiration.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let secret = Self::get_secret();
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
    }

    // 验证 JWT token
    pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let secret = Self::get_secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<Claims>(token, &decoding_key, &validation).map(|token_data| token_data.claims)
    }

    /// 从请求头还原当前操作者
    ///
    /// `Authorization: Bearer <token>`，sub 与 role 不合法时一律视为未认证。
    pub fn extract_actor(request: &HttpRequest) -> Option<Actor> {
        let header = request.headers().get("Authorization")?.to_str().ok()?;
        let token = header.strip_prefix("Bearer ")?;
        let claims = Self::verify_token(token).ok()?;

        let id = claims.sub.parse::<i64>().ok()?;
        let role = claims.role.parse::<UserRole>().ok()?;

        Some(Actor::new(id, role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let token =
            JwtUtils::generate_token_with_expiry(42, "mentor", chrono::Duration::minutes(5))
                .expect("token should encode");
        let claims = JwtUtils::verify_token(&token).expect("token should verify");
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.role, "mentor");
    }

    #[test]
    fn test_expired_token_rejected() {
        let token =
            JwtUtils::generate_token_with_expiry(42, "student", chrono::Duration::minutes(-5))
                .expect("token should encode");
        assert!(JwtUtils::verify_token(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(JwtUtils::verify_token("not-a-jwt").is_err());
    }
}
