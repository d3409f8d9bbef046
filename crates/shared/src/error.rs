//! 统一错误处理模块
//!
//! 定义激励引擎中所有共享的错误类型，使用 thiserror 提供良好的错误信息。
//!
//! 注意：用户达成激励条件（发放奖励）不是错误，由引擎中的
//! `ActionOutcome::Awarded` 表达，不会出现在这里。

use thiserror::Error;

/// 系统错误类型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IncentiveError {
    // ==================== 参数错误 ====================
    /// 构造函数或计数器键的前置条件不满足，只与本次调用有关，不应重试
    #[error("无效的参数: {field} - {message}")]
    InvalidArgument { field: String, message: String },

    // ==================== 验证错误 ====================
    /// 值对象在使用时重新校验失败（例如从队列反序列化出的事件）
    #[error("数据验证失败: {0}")]
    Validation(String),

    // ==================== 查询错误 ====================
    #[error("记录未找到: {entity} id={id}")]
    NotFound { entity: String, id: String },

    // ==================== 通用错误 ====================
    #[error("内部错误: {0}")]
    Internal(String),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, IncentiveError>;

impl IncentiveError {
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// 处理器按事件粒度吞掉的错误：记录后继续处理下一个事件
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NotFound { .. })
    }

    /// 将参数错误转换为验证错误
    ///
    /// 队列根据原始触发参数创建事件时，字段不合法对调用方而言属于验证失败。
    pub fn into_validation(self) -> Self {
        match self {
            Self::InvalidArgument { field, message } => {
                Self::Validation(format!("{field}: {message}"))
            }
            other => other,
        }
    }

    /// 将 validator 的字段错误转换为参数错误
    ///
    /// 多个字段同时出错时取字段名最小的一个，保证结果稳定。
    pub fn from_field_errors(errors: &validator::ValidationErrors) -> Self {
        let first = errors
            .field_errors()
            .into_iter()
            .min_by(|a, b| a.0.cmp(&b.0))
            .and_then(|(field, field_errors)| {
                field_errors.first().map(|error| (field.to_string(), error))
            });

        let Some((field, error)) = first else {
            return Self::invalid_argument("value", errors.to_string());
        };

        let message = error
            .message
            .as_deref()
            .unwrap_or(error.code.as_ref())
            .to_string();
        match error.params.get("value") {
            Some(value) => Self::invalid_argument(field, format!("{message}，实际为 {value}")),
            None => Self::invalid_argument(field, message),
        }
    }
}

/// 从 validator 错误转换
impl From<validator::ValidationErrors> for IncentiveError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}
