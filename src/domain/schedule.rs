// ==========================================
// 清扫值日排班系统 - 排班结果与运行参数
// ==========================================
// Assignment 的 staff_ids 顺序即分配顺序,溢出阶段只追加不重排
// ==========================================

use crate::domain::types::{AreaId, StaffId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ==========================================
// Assignment - 单区域分配结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub area_id: AreaId,
    pub staff_ids: Vec<StaffId>,
}

impl Assignment {
    pub fn new(area_id: impl Into<AreaId>, staff_ids: Vec<StaffId>) -> Self {
        Self {
            area_id: area_id.into(),
            staff_ids,
        }
    }
}

// ==========================================
// RunOptions - 单次排班运行参数
// ==========================================
// locked_* 用于出勤变动后的追加排班: 已发布的分配原样保留,
// 其区域与人员不再进入阶段 1-4,但溢出阶段仍可向其追加人员
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunOptions {
    /// 明天是否节假日(触发 holiday_boost 区域满配)
    #[serde(default)]
    pub is_holiday_tomorrow: bool,

    /// 本次启用的可选区域
    #[serde(default)]
    pub enabled_optional_areas: HashSet<AreaId>,

    /// 当日值日负责人(不参与清扫)
    #[serde(default)]
    pub planner_id: Option<StaffId>,

    /// 已锁定的分配(来自先前的部分运行)
    #[serde(default)]
    pub locked_assignments: Vec<Assignment>,

    /// 已锁定的人员(不进入可用池)
    #[serde(default)]
    pub locked_staff_ids: HashSet<StaffId>,
}

// ==========================================
// ScheduleResult - 排班运行结果
// ==========================================
// assignments 按区域稳定排序键升序; 引擎永不失败,
// 约束缺口以 warnings / skipped_areas 形式降级呈现
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub assignments: Vec<Assignment>,
    pub skipped_areas: Vec<AreaId>,
    pub warnings: Vec<String>,
}

// ==========================================
// ScheduleRecord - 历史排班记录
// ==========================================
// 由外部排班记录存储持久化,引擎只用于公平性信号推导
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub date: NaiveDate,
    pub assignments: Vec<Assignment>,
    #[serde(default)]
    pub planner_id: Option<StaffId>,
}
