// ==========================================
// 清扫值日排班系统 - 公平性信号推导
// ==========================================
// 职责: 从历史排班记录推导近期分配次数与近期清扫区域
// 红线: 无状态、无副作用,引擎只读取快照
// ==========================================

use crate::domain::schedule::ScheduleRecord;
use crate::domain::types::{AreaId, StaffId};
use chrono::{Duration, NaiveDate};
use std::collections::{HashMap, HashSet};

/// 分配次数统计窗口(天)
pub const ASSIGN_COUNT_WINDOW_DAYS: i64 = 14;

/// 近期区域重复惩罚窗口(天)
pub const RECENT_AREA_WINDOW_DAYS: i64 = 7;

// ==========================================
// FairnessSignals - 公平性信号快照
// ==========================================
// 候选排序的两个公平性键来源: 近 14 天被排次数,近 7 天扫过的区域
#[derive(Debug, Clone, Default)]
pub struct FairnessSignals {
    /// 人员 → 窗口期内被分配次数
    pub assignment_counts: HashMap<StaffId, u32>,

    /// 人员 → 窗口期内被分配过的区域集合
    pub recent_areas: HashMap<StaffId, HashSet<AreaId>>,
}

impl FairnessSignals {
    /// 从历史排班记录推导公平性信号
    ///
    /// # 规则
    /// - assignment_counts: date >= today - 14 天 的记录逐人次累加
    /// - recent_areas: date >= today - 7 天 的记录逐人收集区域
    ///
    /// # 参数
    /// - records: 历史排班记录快照
    /// - today: 当前日期(窗口截止基准)
    pub fn from_history(records: &[ScheduleRecord], today: NaiveDate) -> Self {
        let count_cutoff = today - Duration::days(ASSIGN_COUNT_WINDOW_DAYS);
        let area_cutoff = today - Duration::days(RECENT_AREA_WINDOW_DAYS);

        let mut assignment_counts: HashMap<StaffId, u32> = HashMap::new();
        let mut recent_areas: HashMap<StaffId, HashSet<AreaId>> = HashMap::new();

        for record in records {
            if record.date < count_cutoff {
                continue;
            }
            let in_area_window = record.date >= area_cutoff;

            for assignment in &record.assignments {
                for staff_id in &assignment.staff_ids {
                    *assignment_counts.entry(staff_id.clone()).or_insert(0) += 1;
                    if in_area_window {
                        recent_areas
                            .entry(staff_id.clone())
                            .or_default()
                            .insert(assignment.area_id.clone());
                    }
                }
            }
        }

        Self {
            assignment_counts,
            recent_areas,
        }
    }

    /// 窗口期内被分配次数(无记录视为 0)
    pub fn count_for(&self, staff_id: &str) -> u32 {
        self.assignment_counts.get(staff_id).copied().unwrap_or(0)
    }

    /// 窗口期内是否被分配过该区域
    pub fn recently_assigned(&self, staff_id: &str, area_id: &str) -> bool {
        self.recent_areas
            .get(staff_id)
            .map(|areas| areas.contains(area_id))
            .unwrap_or(false)
    }
}
