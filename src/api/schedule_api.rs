// ==========================================
// 清扫值日排班系统 - 排班 API
// ==========================================
// 职责: 输入校验 + 委托引擎执行,供上层界面/命令调用
// 红线: 非法输入在进入引擎前拒绝,引擎本身永不失败
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::area_roles::AreaRoleConfig;
use crate::domain::history::FairnessSignals;
use crate::domain::schedule::{RunOptions, ScheduleResult};
use crate::domain::types::StaffId;
use crate::domain::{Area, Staff};
use crate::engine::orchestrator::ScheduleOrchestrator;
use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::info;

// ==========================================
// ScheduleApi - 排班接口
// ==========================================
pub struct ScheduleApi {
    orchestrator: ScheduleOrchestrator,
}

impl ScheduleApi {
    pub fn new(
        staff: Vec<Staff>,
        areas: Vec<Area>,
        signals: FairnessSignals,
        roles: AreaRoleConfig,
    ) -> Self {
        Self {
            orchestrator: ScheduleOrchestrator::new(staff, areas, signals, roles),
        }
    }

    /// 生成一天的排班
    ///
    /// # 校验
    /// - 出勤名单非空且无重复 ID
    /// - 日期必须是合法的 YYYY-MM-DD
    pub fn generate_daily(
        &self,
        present_staff_ids: &[StaffId],
        date_str: &str,
        options: &RunOptions,
    ) -> ApiResult<ScheduleResult> {
        if present_staff_ids.is_empty() {
            return Err(ApiError::EmptyPresentList);
        }
        let mut seen: HashSet<&str> = HashSet::with_capacity(present_staff_ids.len());
        for id in present_staff_ids {
            if !seen.insert(id.as_str()) {
                return Err(ApiError::DuplicatePresentId(id.clone()));
            }
        }
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|_| ApiError::InvalidDateFormat(date_str.to_string()))?;

        info!(date = %date_str, present = present_staff_ids.len(), "收到排班请求");
        Ok(self.orchestrator.generate(present_staff_ids, date_str, options))
    }
}
