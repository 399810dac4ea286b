// ==========================================
// 清扫值日排班系统 - API层错误类型
// ==========================================
// 职责: 定义面向调用方的错误类型,输入问题在进入引擎前拦截
// 红线: 错误信息必须包含显式原因
// ==========================================

use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入校验错误
    // ==========================================
    #[error("出勤名单为空，无法排班")]
    EmptyPresentList,

    #[error("出勤名单包含重复人员: {0}")]
    DuplicatePresentId(String),

    #[error("日期格式无效（应为 YYYY-MM-DD）: {0}")]
    InvalidDateFormat(String),

    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
