//! 字段校验工具
//!
//! 激励名称、事件名称共用同一套标识符规则；各类 id 统一要求大于 0。
//! 值对象通过 `#[derive(Validate)]` 声明规则，这里提供派生属性引用的
//! 正则和自定义校验函数，以及给单个参数使用的辅助函数。

use std::borrow::Cow;
use std::sync::LazyLock;

use incentive_shared::error::{IncentiveError, Result};
use regex::Regex;
use validator::{ValidateRange, ValidationError};

/// 标识符只允许字母、数字和连字符
pub static IDENTIFIER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+$").expect("标识符正则必须合法"));

const IDENTIFIER_MESSAGE: &str = "必须是非空的字母数字字符串（允许连字符）";
const POSITIVE_MESSAGE: &str = "必须大于 0";

/// 是否为合法标识符（非空，仅包含字母数字和连字符）
pub fn is_identifier(value: &str) -> bool {
    IDENTIFIER_PATTERN.is_match(value)
}

/// 校验标识符，不合法时返回参数错误
pub fn require_identifier(field: &str, value: &str) -> Result<()> {
    if is_identifier(value) {
        Ok(())
    } else {
        Err(IncentiveError::invalid_argument(
            field,
            format!("{IDENTIFIER_MESSAGE}，实际为 {value:?}"),
        ))
    }
}

/// 校验 id 大于 0
pub fn require_positive(field: &str, value: i64) -> Result<()> {
    if value.validate_range(Some(1), None, None, None) {
        Ok(())
    } else {
        Err(IncentiveError::invalid_argument(
            field,
            format!("{POSITIVE_MESSAGE}，实际为 {value}"),
        ))
    }
}

/// 自定义校验：去掉首尾空白后不能为空
pub fn not_blank(value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("不能为空")));
    }
    Ok(())
}
