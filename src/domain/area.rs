// ==========================================
// 清扫值日排班系统 - 区域领域模型
// ==========================================
// 用途: 区域目录写入,排班引擎只读
// 约束: 1 <= min_people <= max_people
// ==========================================

use crate::domain::types::{AreaId, AreaPriority, GenderRestriction};
use serde::{Deserialize, Serialize};

// ==========================================
// Area - 清扫区域主数据
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    // ===== 主键 =====
    pub id: AreaId, // 区域唯一标识

    // ===== 基础信息 =====
    pub name: String,           // 区域名称
    pub priority: AreaPriority, // 优先级(mandatory/flexible/optional)
    pub order: i32,             // 稳定排序键(展示与结果排序依据)

    // ===== 排班约束 =====
    #[serde(default)]
    pub gender_restriction: GenderRestriction, // 性别限制
    pub min_people: u32, // 最少人数
    pub max_people: u32, // 最多人数(溢出分配阶段可被突破)
    #[serde(default)]
    pub floor: i32, // 所在楼层(0=不限楼层)
    #[serde(default)]
    pub holiday_boost: bool, // 节假日前一天按 max_people 强制满配
}

impl Area {
    /// 区域楼层与人员楼层限制是否兼容
    ///
    /// floor=0 的区域任何人都可进入; 无楼层限制的人员任何区域都可进入
    pub fn floor_compatible(&self, floor_restriction: Option<i32>) -> bool {
        match floor_restriction {
            None => true,
            Some(f) => self.floor == 0 || f == self.floor,
        }
    }
}
