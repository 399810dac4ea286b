// ==========================================
// 清扫值日排班系统 - 值日负责人轮值
// ==========================================
// 职责: 周轮值查询与代理判定,持久化由外部负责
// 负责人当日不进入清扫池(由 RunOptions.planner_id 传入引擎)
// ==========================================

use crate::domain::types::StaffId;
use serde::{Deserialize, Serialize};

// ==========================================
// PlannerRotation - 轮值表
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerRotation {
    /// 轮值人员顺序表
    #[serde(default)]
    pub planners: Vec<StaffId>,

    /// 当前轮值位置(按周推进)
    #[serde(default)]
    pub current_index: usize,
}

/// 轮值查询结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerPick {
    pub id: StaffId,
    /// 原定负责人缺勤时由代理人顶替
    pub is_deputy: bool,
    pub original_id: StaffId,
}

impl PlannerRotation {
    /// 查询本周负责人(含代理判定)
    ///
    /// # 规则
    /// - 轮值表为空 → None
    /// - 未提供出勤名单 → 直接返回当前轮值人
    /// - 当前轮值人缺勤 → 从下一位起顺序找到第一位出勤者作为代理
    /// - 全员缺勤 → None
    pub fn current_planner(&self, present_staff_ids: Option<&[StaffId]>) -> Option<PlannerPick> {
        if self.planners.is_empty() {
            return None;
        }
        let idx = self.current_index % self.planners.len();
        let planner_id = &self.planners[idx];

        if let Some(present) = present_staff_ids {
            if !present.contains(planner_id) {
                for i in 1..self.planners.len() {
                    let next_idx = (idx + i) % self.planners.len();
                    let next_id = &self.planners[next_idx];
                    if present.contains(next_id) {
                        return Some(PlannerPick {
                            id: next_id.clone(),
                            is_deputy: true,
                            original_id: planner_id.clone(),
                        });
                    }
                }
                return None;
            }
        }

        Some(PlannerPick {
            id: planner_id.clone(),
            is_deputy: false,
            original_id: planner_id.clone(),
        })
    }

    /// 推进到下一周轮值位置
    pub fn advance_week(&mut self) {
        if self.planners.is_empty() {
            return;
        }
        self.current_index = (self.current_index + 1) % self.planners.len();
    }

    /// 更新轮值表,位置越界时归零
    pub fn set_rotation(&mut self, planner_ids: Vec<StaffId>) {
        if self.current_index >= planner_ids.len() {
            self.current_index = 0;
        }
        self.planners = planner_ids;
    }
}
