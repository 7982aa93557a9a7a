//! 业务错误码
//!
//! 前两位对应 HTTP 状态，后三位为业务细分。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 400xx 请求错误
    BadRequest = 40000,
    ValidationFailed = 40001,

    // 401xx 认证错误
    Unauthorized = 40100,

    // 403xx 权限错误
    Forbidden = 40300,

    // 404xx 资源不存在
    NotFound = 40400,
    TaskNotFound = 40401,
    StudentNotFound = 40402,
    SubmissionNotFound = 40403,

    // 409xx 状态冲突
    InvalidState = 40900,

    // 500xx 服务器错误
    InternalServerError = 50000,
}
