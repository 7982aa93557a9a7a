//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_internship_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum InternshipError {
            $($variant(String),)*
        }

        impl InternshipError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(InternshipError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(InternshipError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(InternshipError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl InternshipError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        InternshipError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_internship_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    InvalidState("E006", "Invalid State Error"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
    Authentication("E009", "Authentication Error"),
    Authorization("E010", "Authorization Error"),
}

impl InternshipError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for InternshipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for InternshipError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for InternshipError {
    fn from(err: sea_orm::DbErr) -> Self {
        InternshipError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for InternshipError {
    fn from(err: serde_json::Error) -> Self {
        InternshipError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for InternshipError {
    fn from(err: chrono::ParseError) -> Self {
        InternshipError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, InternshipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(InternshipError::database_config("test").code(), "E001");
        assert_eq!(InternshipError::validation("test").code(), "E004");
        assert_eq!(InternshipError::invalid_state("test").code(), "E006");
        assert_eq!(InternshipError::authorization("test").code(), "E010");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            InternshipError::invalid_state("test").error_type(),
            "Invalid State Error"
        );
        assert_eq!(
            InternshipError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = InternshipError::validation("缺少提交附件");
        assert_eq!(err.message(), "缺少提交附件");
    }

    #[test]
    fn test_format_simple() {
        let err = InternshipError::not_found("任务不存在: 42");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("任务不存在"));
    }
}
