// ==========================================
// 清扫值日排班系统 - 人数决策引擎
// ==========================================
// 职责: 在候选充足与全局覆盖之间做贪心取舍
// 红线: 不回溯,不追求全局最优
// ==========================================

use crate::domain::area::Area;

/// 可用池"人手充裕"阈值: 达到该值时按 max_people 满配
pub const AMPLE_POOL_THRESHOLD: usize = 20;

// ==========================================
// HeadcountPolicy - 人数决策
// ==========================================
pub struct HeadcountPolicy;

impl HeadcountPolicy {
    /// 决定本区域本轮分配人数
    ///
    /// # 规则(依序)
    /// 1. 有强制人数(节前满配) → min(强制人数, 候选数)
    /// 2. 候选数 <= min_people → min(候选数, min_people)
    /// 3. 池内总人数 >= 20 → min(max_people, 候选数)(人手充裕,放量)
    /// 4. 否则 → min(min_people, 候选数)(人手紧张,省着给后面的区域)
    ///
    /// # 参数
    /// - area: 目标区域
    /// - candidate_count: 合格候选数
    /// - total_available: 当前可用池总人数(含对该区域不合格者)
    /// - force_max: 强制人数覆盖(仅必扫性别区域在节假日前一天传入)
    pub fn decide(
        area: &Area,
        candidate_count: usize,
        total_available: usize,
        force_max: Option<u32>,
    ) -> usize {
        let min_people = area.min_people as usize;
        let max_people = area.max_people as usize;

        if let Some(forced) = force_max {
            return (forced as usize).min(candidate_count);
        }

        if candidate_count <= min_people {
            return candidate_count.min(min_people);
        }

        if total_available >= AMPLE_POOL_THRESHOLD {
            return max_people.min(candidate_count);
        }

        min_people.min(candidate_count)
    }
}
