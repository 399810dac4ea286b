// ==========================================
// 清扫值日排班系统 - 资格过滤引擎
// ==========================================
// 职责: 判定可用池中谁满足某区域的硬约束
// 红线: 无状态、无副作用; 空结果表示本轮无法安排该区域
// ==========================================

use crate::domain::area::Area;
use crate::domain::staff::Staff;
use crate::domain::types::{Gender, GenderRestriction, StaffId};
use std::collections::{BTreeMap, BTreeSet};

// ==========================================
// EligibilityFilter - 资格过滤器
// ==========================================
pub struct EligibilityFilter;

impl EligibilityFilter {
    /// 过滤出满足区域硬约束的候选人
    ///
    /// # 规则
    /// 1. 楼层兼容: 区域不限楼层 或 人员不限楼层 或 两者楼层一致
    /// 2. 不在该人员的个人禁排清单内
    /// 3. 性别规则: female 仅留女性; malePreferred 有男性则只留男性,
    ///    无男性回退到全体合格者
    ///
    /// 目录中查不到的 ID 一律不合格。返回顺序与池的迭代顺序一致
    /// (字典序),保证与出勤名单的传入顺序无关
    pub fn filter_candidates(
        area: &Area,
        pool: &BTreeSet<StaffId>,
        staff_map: &BTreeMap<StaffId, Staff>,
    ) -> Vec<StaffId> {
        let eligible: Vec<StaffId> = pool
            .iter()
            .filter(|id| {
                let Some(staff) = staff_map.get(*id) else {
                    return false;
                };
                if !area.floor_compatible(staff.floor_restriction) {
                    return false;
                }
                !staff.excludes_area(&area.id)
            })
            .cloned()
            .collect();

        match area.gender_restriction {
            GenderRestriction::None => eligible,
            GenderRestriction::FemaleOnly => eligible
                .into_iter()
                .filter(|id| {
                    staff_map
                        .get(id)
                        .map(|s| s.gender == Gender::Female)
                        .unwrap_or(false)
                })
                .collect(),
            GenderRestriction::MalePreferred => {
                let males: Vec<StaffId> = eligible
                    .iter()
                    .filter(|id| {
                        staff_map
                            .get(*id)
                            .map(|s| s.gender == Gender::Male)
                            .unwrap_or(false)
                    })
                    .cloned()
                    .collect();
                if males.is_empty() {
                    eligible
                } else {
                    males
                }
            }
        }
    }
}
