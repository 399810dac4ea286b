// ==========================================
// 清扫值日排班系统 - 单区域分配步骤
// ==========================================
// 职责: 资格过滤 + 公平性排序 + 人数裁剪
// 排序键优先级: 近期扫过本区域 > 近期被排次数 > 确定性随机
// ==========================================

use crate::domain::area::Area;
use crate::domain::history::FairnessSignals;
use crate::domain::staff::Staff;
use crate::domain::types::StaffId;
use crate::engine::eligibility::EligibilityFilter;
use crate::engine::headcount::HeadcountPolicy;
use crate::engine::seeded_random::SeededRandom;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

// ==========================================
// CandidateScore - 候选人三键评分
// ==========================================
#[derive(Debug, Clone)]
struct CandidateScore {
    staff_id: StaffId,
    /// 近 7 天扫过本区域(1=有,惩罚重复)
    recently_here: u8,
    /// 近 14 天被排次数(惩罚高频)
    recent_count: u32,
    /// 确定性随机平局裁决
    random_factor: f64,
}

impl CandidateScore {
    fn compare(&self, other: &Self) -> Ordering {
        match self.recently_here.cmp(&other.recently_here) {
            Ordering::Equal => {}
            ord => return ord,
        }
        match self.recent_count.cmp(&other.recent_count) {
            Ordering::Equal => {}
            ord => return ord,
        }
        self.random_factor
            .partial_cmp(&other.random_factor)
            .unwrap_or(Ordering::Equal)
    }
}

// ==========================================
// AreaAssignmentStep - 单区域分配
// ==========================================
pub struct AreaAssignmentStep;

impl AreaAssignmentStep {
    /// 为一个区域挑选有界的候选子集
    ///
    /// 每个合格候选消耗一次随机数(按池的字典序),三键升序排序后
    /// 从头部取 HeadcountPolicy 决定的人数。无合格候选返回空,
    /// 由调用方决定告警或跳过
    pub fn select(
        area: &Area,
        pool: &BTreeSet<StaffId>,
        staff_map: &BTreeMap<StaffId, Staff>,
        signals: &FairnessSignals,
        rng: &mut SeededRandom,
        force_max: Option<u32>,
    ) -> Vec<StaffId> {
        let eligible = EligibilityFilter::filter_candidates(area, pool, staff_map);
        if eligible.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<CandidateScore> = eligible
            .into_iter()
            .map(|staff_id| {
                let random_factor = rng.next();
                let recently_here = u8::from(signals.recently_assigned(&staff_id, &area.id));
                let recent_count = signals.count_for(&staff_id);
                CandidateScore {
                    staff_id,
                    recently_here,
                    recent_count,
                    random_factor,
                }
            })
            .collect();

        scored.sort_by(|a, b| a.compare(b));

        let headcount = HeadcountPolicy::decide(area, scored.len(), pool.len(), force_max);
        scored
            .into_iter()
            .take(headcount)
            .map(|c| c.staff_id)
            .collect()
    }
}
