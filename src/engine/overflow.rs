// ==========================================
// 清扫值日排班系统 - 溢出再分配引擎
// ==========================================
// 职责: 阶段 1-4 结束后,把仍未分配的人员塞进已有分配
// 红线: 可以突破 max_people,但绝不让同一人出现两次;
//       只要存在兼容区域就不许有人空着
// ==========================================

use crate::config::area_roles::AreaRoleConfig;
use crate::domain::area::Area;
use crate::domain::schedule::Assignment;
use crate::domain::staff::Staff;
use crate::domain::types::{AreaId, Gender, GenderRestriction, StaffId};
use crate::engine::seeded_random::SeededRandom;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

// ==========================================
// OverflowDistributor - 溢出再分配
// ==========================================
pub struct OverflowDistributor;

impl OverflowDistributor {
    /// 把剩余人员逐个追加到已有分配中
    ///
    /// # 规则
    /// - 处理顺序: 每人抽取一个随机分,升序排列
    /// - 目标排序: 未满员优先 → 非空间受限优先 → 优先增援区域优先 → 排序键升序
    /// - 逐目标检查: 性别(仅 female 区域拒男)、楼层、个人禁排;
    ///   空间受限区域已满员时,只要候选列表里还有非受限区域就跳过它
    /// - 完全无兼容目标: 回退到第一个性别不冲突的目标并告警;
    ///   连这也没有则告警后放弃该人员
    pub fn distribute(
        remaining_pool: &BTreeSet<StaffId>,
        assignments: &mut [Assignment],
        area_map: &BTreeMap<AreaId, Area>,
        staff_map: &BTreeMap<StaffId, Staff>,
        roles: &AreaRoleConfig,
        rng: &mut SeededRandom,
        warnings: &mut Vec<String>,
    ) {
        // 随机打乱剩余人员(池按字典序迭代,抽样顺序与出勤传入顺序无关)
        let mut scored_remaining: Vec<(StaffId, f64)> = remaining_pool
            .iter()
            .map(|id| (id.clone(), rng.next()))
            .collect();
        scored_remaining.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        for (staff_id, _) in scored_remaining {
            let Some(staff) = staff_map.get(&staff_id) else {
                // 目录查不到的 ID 无法做任何兼容性判断,按不可安置处理
                warnings.push(format!("⚠️ {} 无合适区域（性别或空间限制）", staff_id));
                continue;
            };

            // 每人重排目标列表: 前一个人的追加会改变满员状态
            let targets = Self::sorted_targets(assignments, area_map, roles);

            let mut placed = false;
            for &target_idx in &targets {
                let area = &area_map[&assignments[target_idx].area_id];

                if Self::violates_gender(area, staff) {
                    continue;
                }
                if !area.floor_compatible(staff.floor_restriction) {
                    continue;
                }
                if staff.excludes_area(&area.id) {
                    continue;
                }
                // 空间受限区域满员后尽量不再塞人
                if roles.is_strict_space(&area.id)
                    && assignments[target_idx].staff_ids.len() >= area.max_people as usize
                    && targets
                        .iter()
                        .any(|&j| !roles.is_strict_space(&assignments[j].area_id))
                {
                    continue;
                }

                debug!(staff_id = %staff.id, area_id = %area.id, "溢出追加");
                assignments[target_idx].staff_ids.push(staff.id.clone());
                placed = true;
                break;
            }

            if !placed {
                // 最后手段: 只看性别,忽略楼层与个人禁排
                let last_resort = targets.iter().copied().find(|&j| {
                    !Self::violates_gender(&area_map[&assignments[j].area_id], staff)
                });
                match last_resort {
                    Some(j) => {
                        let area_name = area_map[&assignments[j].area_id].name.clone();
                        assignments[j].staff_ids.push(staff.id.clone());
                        warnings.push(format!(
                            "⚠️ {} 无完全合适区域，已强制分配至 {}",
                            staff.name, area_name
                        ));
                    }
                    None => {
                        warnings.push(format!(
                            "⚠️ {} 无合适区域（性别或空间限制）",
                            staff.name
                        ));
                    }
                }
            }
        }
    }

    /// 候选目标索引,按适合度排序
    fn sorted_targets(
        assignments: &[Assignment],
        area_map: &BTreeMap<AreaId, Area>,
        roles: &AreaRoleConfig,
    ) -> Vec<usize> {
        let mut targets: Vec<usize> = (0..assignments.len())
            .filter(|&i| area_map.contains_key(&assignments[i].area_id))
            .collect();

        targets.sort_by_key(|&i| {
            let assignment = &assignments[i];
            let area = &area_map[&assignment.area_id];
            let full = assignment.staff_ids.len() >= area.max_people as usize;
            let strict = roles.is_strict_space(&area.id);
            let prioritized = roles.is_priority_overflow(&area.id);
            (u8::from(full), u8::from(strict), u8::from(!prioritized), area.order)
        });

        targets
    }

    /// 性别硬约束: 仅 female 区域拒绝男性
    fn violates_gender(area: &Area, staff: &Staff) -> bool {
        area.gender_restriction == GenderRestriction::FemaleOnly && staff.gender == Gender::Male
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::AreaPriority;
    use std::collections::HashSet;

    fn staff(id: &str, gender: Gender) -> Staff {
        Staff {
            id: id.to_string(),
            name: id.to_string(),
            gender,
            active: true,
            role: Default::default(),
            department: None,
            floor_restriction: None,
            exclude_areas: HashSet::new(),
        }
    }

    fn area(id: &str, order: i32, max_people: u32, restriction: GenderRestriction) -> Area {
        Area {
            id: id.to_string(),
            name: id.to_string(),
            priority: AreaPriority::Mandatory,
            order,
            gender_restriction: restriction,
            min_people: 1,
            max_people,
            floor: 0,
            holiday_boost: false,
        }
    }

    fn run_overflow(
        pool: &[&str],
        assignments: &mut [Assignment],
        areas: Vec<Area>,
        staffs: Vec<Staff>,
        roles: AreaRoleConfig,
    ) -> Vec<String> {
        let pool: BTreeSet<StaffId> = pool.iter().map(|s| s.to_string()).collect();
        let area_map: BTreeMap<AreaId, Area> =
            areas.into_iter().map(|a| (a.id.clone(), a)).collect();
        let staff_map: BTreeMap<StaffId, Staff> =
            staffs.into_iter().map(|s| (s.id.clone(), s)).collect();
        let mut rng = SeededRandom::new(7);
        let mut warnings = Vec::new();
        OverflowDistributor::distribute(
            &pool,
            assignments,
            &area_map,
            &staff_map,
            &roles,
            &mut rng,
            &mut warnings,
        );
        warnings
    }

    #[test]
    fn test_fills_not_full_target_first() {
        let mut assignments = vec![
            Assignment::new("a1", vec!["x".to_string(), "y".to_string()]), // 已满(max=2)
            Assignment::new("a2", vec!["z".to_string()]),                  // 未满
        ];
        let warnings = run_overflow(
            &["s1"],
            &mut assignments,
            vec![
                area("a1", 1, 2, GenderRestriction::None),
                area("a2", 2, 2, GenderRestriction::None),
            ],
            vec![staff("s1", Gender::Male)],
            AreaRoleConfig::default(),
        );
        assert!(warnings.is_empty());
        assert_eq!(assignments[1].staff_ids.len(), 2);
        assert!(assignments[1].staff_ids.contains(&"s1".to_string()));
    }

    #[test]
    fn test_female_only_rejects_male_everywhere() {
        let mut assignments = vec![Assignment::new("a1", vec!["f1".to_string()])];
        let warnings = run_overflow(
            &["s1"],
            &mut assignments,
            vec![area("a1", 1, 2, GenderRestriction::FemaleOnly)],
            vec![staff("s1", Gender::Male)],
            AreaRoleConfig::default(),
        );
        // 连最后手段都不允许男性进 female 区域
        assert_eq!(assignments[0].staff_ids.len(), 1);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("无合适区域"));
    }

    #[test]
    fn test_strict_space_skipped_when_full() {
        let mut assignments = vec![
            Assignment::new("wc", vec!["x".to_string()]), // 空间受限且已满(max=1)
            Assignment::new("hall", vec!["y".to_string()]), // order 更靠后但非受限
        ];
        let roles = AreaRoleConfig {
            strict_space_areas: ["wc".to_string()].into(),
            ..Default::default()
        };
        run_overflow(
            &["s1"],
            &mut assignments,
            vec![
                area("wc", 1, 1, GenderRestriction::None),
                area("hall", 2, 1, GenderRestriction::None),
            ],
            vec![staff("s1", Gender::Male)],
            roles,
        );
        assert_eq!(assignments[0].staff_ids.len(), 1);
        assert_eq!(assignments[1].staff_ids.len(), 2);
    }

    #[test]
    fn test_strict_space_accepts_when_no_alternative() {
        let mut assignments = vec![Assignment::new("wc", vec!["x".to_string()])];
        let roles = AreaRoleConfig {
            strict_space_areas: ["wc".to_string()].into(),
            ..Default::default()
        };
        let warnings = run_overflow(
            &["s1"],
            &mut assignments,
            vec![area("wc", 1, 1, GenderRestriction::None)],
            vec![staff("s1", Gender::Male)],
            roles,
        );
        // 只剩受限区域时照样塞入,不需要强制告警
        assert!(warnings.is_empty());
        assert_eq!(assignments[0].staff_ids.len(), 2);
    }

    #[test]
    fn test_priority_overflow_area_preferred() {
        let mut assignments = vec![
            Assignment::new("a1", vec!["x".to_string(), "x2".to_string()]),
            Assignment::new("office", vec!["y".to_string(), "y2".to_string()]),
        ];
        let roles = AreaRoleConfig {
            priority_overflow_areas: ["office".to_string()].into(),
            ..Default::default()
        };
        // 两个目标都已满(max=2),优先增援区域吸收
        run_overflow(
            &["s1"],
            &mut assignments,
            vec![
                area("a1", 1, 2, GenderRestriction::None),
                area("office", 2, 2, GenderRestriction::None),
            ],
            vec![staff("s1", Gender::Male)],
            roles,
        );
        assert_eq!(assignments[1].staff_ids.len(), 3);
    }

    #[test]
    fn test_forced_placement_warns() {
        let mut assignments = vec![Assignment::new("a1", vec!["x".to_string()])];
        let mut excluded = staff("s1", Gender::Male);
        excluded.exclude_areas.insert("a1".to_string());
        let warnings = run_overflow(
            &["s1"],
            &mut assignments,
            vec![area("a1", 1, 2, GenderRestriction::None)],
            vec![excluded],
            AreaRoleConfig::default(),
        );
        // 个人禁排被最后手段忽略,但要留下强制分配告警
        assert_eq!(assignments[0].staff_ids.len(), 2);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("强制分配"));
    }

    #[test]
    fn test_unknown_staff_id_warns() {
        let mut assignments = vec![Assignment::new("a1", vec!["x".to_string()])];
        let warnings = run_overflow(
            &["ghost"],
            &mut assignments,
            vec![area("a1", 1, 2, GenderRestriction::None)],
            vec![],
            AreaRoleConfig::default(),
        );
        assert_eq!(assignments[0].staff_ids.len(), 1);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("ghost"));
    }

    #[test]
    fn test_never_places_same_person_twice() {
        let mut assignments = vec![
            Assignment::new("a1", vec![]),
            Assignment::new("a2", vec![]),
        ];
        run_overflow(
            &["s1", "s2", "s3"],
            &mut assignments,
            vec![
                area("a1", 1, 2, GenderRestriction::None),
                area("a2", 2, 2, GenderRestriction::None),
            ],
            vec![
                staff("s1", Gender::Male),
                staff("s2", Gender::Male),
                staff("s3", Gender::Female),
            ],
            AreaRoleConfig::default(),
        );
        let mut all: Vec<&StaffId> = assignments
            .iter()
            .flat_map(|a| a.staff_ids.iter())
            .collect();
        let total = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), total);
        assert_eq!(total, 3);
    }
}
