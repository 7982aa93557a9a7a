use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户角色（由外部身份服务签发，JWT 中携带）
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserRole {
    Student, // 学生
    Mentor,  // 导师
    Admin,   // 管理员
}

impl UserRole {
    pub const STUDENT: &'static str = "student";
    pub const MENTOR: &'static str = "mentor";
    pub const ADMIN: &'static str = "admin";

    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin]
    }
    pub fn mentor_roles() -> &'static [&'static UserRole] {
        &[&Self::Mentor, &Self::Admin]
    }
    pub fn all_roles() -> &'static [&'static UserRole] {
        &[&Self::Student, &Self::Mentor, &Self::Admin]
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            UserRole::STUDENT => Ok(UserRole::Student),
            UserRole::MENTOR => Ok(UserRole::Mentor),
            UserRole::ADMIN => Ok(UserRole::Admin),
            _ => Err(serde::de::Error::custom(format!(
                "无效的用户角色: '{s}'. 支持的角色: student, mentor, admin"
            ))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "{}", UserRole::STUDENT),
            UserRole::Mentor => write!(f, "{}", UserRole::MENTOR),
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(UserRole::Student),
            "mentor" => Ok(UserRole::Mentor),
            "admin" => Ok(UserRole::Admin),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

/// 当前操作者
///
/// 身份与角色由外部身份服务解析，核心操作一律显式传入，
/// 不从全局会话读取，便于确定性测试。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Actor {
    pub id: i64,
    pub role: UserRole,
}

impl Actor {
    pub fn new(id: i64, role: UserRole) -> Self {
        Self { id, role }
    }

    /// 是否具备导师权限（导师或管理员）
    pub fn is_mentor(&self) -> bool {
        matches!(self.role, UserRole::Mentor | UserRole::Admin)
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_student(&self) -> bool {
        self.role == UserRole::Student
    }
}
