// ==========================================
// 清扫值日排班系统 - 排班编排器
// ==========================================
// 用途: 协调四个分配阶段与溢出再分配的执行顺序
// 阶段: 必扫(性别限制) → 必扫(无限制) → 弹性 → 可选 → 溢出
// 红线: 引擎永不失败,约束缺口以告警/跳过降级; 一次运行内
//       人员目录、区域目录、公平性信号均为只读快照
// ==========================================

use crate::config::area_roles::AreaRoleConfig;
use crate::domain::area::Area;
use crate::domain::history::FairnessSignals;
use crate::domain::schedule::{Assignment, RunOptions, ScheduleResult};
use crate::domain::staff::Staff;
use crate::domain::types::{AreaId, AreaPriority, GenderRestriction, StaffId};
use crate::engine::assignment::AreaAssignmentStep;
use crate::engine::overflow::OverflowDistributor;
use crate::engine::seeded_random::{derive_seed, SeededRandom};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::{debug, info};

/// 目录中不存在的区域在结果排序中的兜底排序键
const UNKNOWN_AREA_ORDER: i32 = 99;

// ==========================================
// ScheduleOrchestrator - 排班编排器
// ==========================================
pub struct ScheduleOrchestrator {
    staff_map: BTreeMap<StaffId, Staff>,
    /// 全部区域,按稳定排序键升序
    areas: Vec<Area>,
    area_map: BTreeMap<AreaId, Area>,
    signals: FairnessSignals,
    roles: AreaRoleConfig,
}

impl ScheduleOrchestrator {
    /// 创建编排器,持有一次运行所需的全部只读快照
    ///
    /// # 参数
    /// - staff: 人员目录快照
    /// - areas: 区域目录快照(内部按 order 排序)
    /// - signals: 公平性信号快照
    /// - roles: 特殊区域角色配置
    pub fn new(
        staff: Vec<Staff>,
        mut areas: Vec<Area>,
        signals: FairnessSignals,
        roles: AreaRoleConfig,
    ) -> Self {
        areas.sort_by_key(|a| a.order);
        let staff_map = staff.into_iter().map(|s| (s.id.clone(), s)).collect();
        let area_map = areas.iter().map(|a| (a.id.clone(), a.clone())).collect();
        Self {
            staff_map,
            areas,
            area_map,
            signals,
            roles,
        }
    }

    /// 生成一天的排班
    ///
    /// 同一 (出勤集合, 日期, 选项, 快照) 的重复调用产生逐字节相同的结果。
    /// 空出勤名单按约定由调用层拒绝,这里仅以告警降级
    pub fn generate(
        &self,
        present_staff_ids: &[StaffId],
        date_str: &str,
        options: &RunOptions,
    ) -> ScheduleResult {
        let seed = derive_seed(date_str, present_staff_ids);
        let mut rng = SeededRandom::new(seed);

        info!(
            date = %date_str,
            present_count = present_staff_ids.len(),
            locked_assignments = options.locked_assignments.len(),
            seed,
            "开始执行排班流程"
        );

        // 可用池 = 出勤 - 值日负责人 - 已锁定人员
        let mut available_pool: BTreeSet<StaffId> = present_staff_ids
            .iter()
            .filter(|id| Some(id.as_str()) != options.planner_id.as_deref())
            .filter(|id| !options.locked_staff_ids.contains(*id))
            .cloned()
            .collect();

        // 锁定的分配原样进入结果,其区域不再参与阶段 1-4
        let mut assignments: Vec<Assignment> = options.locked_assignments.clone();
        let locked_area_ids: HashSet<&str> = options
            .locked_assignments
            .iter()
            .map(|a| a.area_id.as_str())
            .collect();

        let mut skipped_areas: Vec<AreaId> = Vec::new();
        let mut warnings: Vec<String> = Vec::new();

        let unlocked = |a: &&Area| !locked_area_ids.contains(a.id.as_str());
        let mandatory: Vec<&Area> = self
            .areas
            .iter()
            .filter(|a| a.priority == AreaPriority::Mandatory)
            .filter(unlocked)
            .collect();
        let flexible: Vec<&Area> = self
            .areas
            .iter()
            .filter(|a| a.priority == AreaPriority::Flexible)
            .filter(unlocked)
            .collect();
        let optional: Vec<&Area> = self
            .areas
            .iter()
            .filter(|a| a.priority == AreaPriority::Optional)
            .filter(unlocked)
            .collect();

        // ==========================================
        // 阶段 1: 必扫区域(有性别限制)
        // ==========================================
        debug!("阶段1: 必扫区域(性别限制)");
        for &area in mandatory
            .iter()
            .filter(|a| a.gender_restriction != GenderRestriction::None)
        {
            // 节假日前一天按 max_people 强制满配
            let force_max = if area.holiday_boost && options.is_holiday_tomorrow {
                Some(area.max_people)
            } else {
                None
            };
            let chosen = AreaAssignmentStep::select(
                area,
                &available_pool,
                &self.staff_map,
                &self.signals,
                &mut rng,
                force_max,
            );
            if chosen.is_empty() {
                // 必扫失败只告警,不进 skipped_areas(既有行为,勿"修复")
                warnings.push(format!("⚠️ {}：无法安排符合条件的人员", area.name));
            } else {
                Self::commit(area, chosen, &mut assignments, &mut available_pool);
            }
        }

        // ==========================================
        // 阶段 2: 必扫区域(无性别限制)
        // ==========================================
        debug!("阶段2: 必扫区域(无限制)");
        for &area in mandatory
            .iter()
            .filter(|a| a.gender_restriction == GenderRestriction::None)
        {
            let chosen = AreaAssignmentStep::select(
                area,
                &available_pool,
                &self.staff_map,
                &self.signals,
                &mut rng,
                None,
            );
            if chosen.is_empty() {
                warnings.push(format!("⚠️ {}：人员不足，无法安排必扫区域", area.name));
            } else {
                Self::commit(area, chosen, &mut assignments, &mut available_pool);
            }
        }

        // ==========================================
        // 阶段 3: 弹性区域(钉选区域最先处理)
        // ==========================================
        debug!("阶段3: 弹性区域");
        let mut sorted_flexible = flexible;
        // 趁池最充裕时让钉选区域先挑人;其余保持 order 升序
        sorted_flexible.sort_by_key(|a| !self.roles.is_pinned_flexible(&a.id));

        for area in sorted_flexible {
            if available_pool.is_empty() {
                skipped_areas.push(area.id.clone());
                continue;
            }
            let chosen = AreaAssignmentStep::select(
                area,
                &available_pool,
                &self.staff_map,
                &self.signals,
                &mut rng,
                None,
            );
            if chosen.is_empty() {
                skipped_areas.push(area.id.clone());
            } else {
                Self::commit(area, chosen, &mut assignments, &mut available_pool);
            }
        }

        // ==========================================
        // 阶段 4: 可选区域(仅限当日启用)
        // ==========================================
        debug!("阶段4: 可选区域");
        for area in optional {
            if !options.enabled_optional_areas.contains(&area.id) || available_pool.is_empty() {
                skipped_areas.push(area.id.clone());
                continue;
            }
            let chosen = AreaAssignmentStep::select(
                area,
                &available_pool,
                &self.staff_map,
                &self.signals,
                &mut rng,
                None,
            );
            if chosen.is_empty() {
                skipped_areas.push(area.id.clone());
            } else {
                Self::commit(area, chosen, &mut assignments, &mut available_pool);
            }
        }

        // ==========================================
        // 阶段 5: 溢出再分配
        // ==========================================
        if !available_pool.is_empty() {
            debug!(remaining = available_pool.len(), "阶段5: 溢出再分配");
            OverflowDistributor::distribute(
                &available_pool,
                &mut assignments,
                &self.area_map,
                &self.staff_map,
                &self.roles,
                &mut rng,
                &mut warnings,
            );
        }

        // 结果按区域稳定排序键输出,与处理顺序无关
        assignments.sort_by_key(|a| {
            self.area_map
                .get(&a.area_id)
                .map(|area| area.order)
                .unwrap_or(UNKNOWN_AREA_ORDER)
        });

        info!(
            assignments = assignments.len(),
            skipped = skipped_areas.len(),
            warnings = warnings.len(),
            "排班流程完成"
        );

        ScheduleResult {
            assignments,
            skipped_areas,
            warnings,
        }
    }

    /// 落位一个区域的选择结果并从池中移除
    fn commit(
        area: &Area,
        chosen: Vec<StaffId>,
        assignments: &mut Vec<Assignment>,
        available_pool: &mut BTreeSet<StaffId>,
    ) {
        for id in &chosen {
            available_pool.remove(id);
        }
        debug!(area_id = %area.id, count = chosen.len(), "区域分配完成");
        assignments.push(Assignment::new(area.id.clone(), chosen));
    }
}
