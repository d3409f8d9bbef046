//! 指标定义
//!
//! 引擎通过 metrics crate 的门面记录指标，这里集中维护指标名和描述，
//! 避免各组件里散落字符串。未安装 recorder 时所有记录都是空操作。

/// 从队列取出的事件数
pub const EVENTS_DEQUEUED: &str = "incentive_events_dequeued_total";
/// 因未找到或验证失败而跳过的事件数，按 reason 标签区分
pub const EVENTS_SKIPPED: &str = "incentive_events_skipped_total";
/// 奖励发放次数，按 reason 标签区分
pub const AWARDS: &str = "incentive_awards_total";
/// 计数器调用次数，按 result 标签区分（created / debounced / incremented / reset）
pub const COUNTER_INCREMENTS: &str = "incentive_counter_increments_total";

/// 注册指标描述
///
/// 这些描述会出现在导出端的 HELP 注释中
pub fn describe_metrics() {
    metrics::describe_counter!(EVENTS_DEQUEUED, "Total number of incentive events dequeued");
    metrics::describe_counter!(
        EVENTS_SKIPPED,
        "Total number of incentive events skipped after a recoverable failure"
    );
    metrics::describe_counter!(AWARDS, "Total number of incentive awards signalled");
    metrics::describe_counter!(
        COUNTER_INCREMENTS,
        "Total number of counter increment-or-reset calls"
    );
}
