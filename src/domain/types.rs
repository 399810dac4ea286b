// ==========================================
// 清扫值日排班系统 - 领域类型定义
// ==========================================
// 序列化格式与历史排班记录保持一致
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 人员 ID（由外部人员目录分配）
pub type StaffId = String;

/// 区域 ID（由外部区域目录分配）
pub type AreaId = String;

// ==========================================
// 性别 (Gender)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,   // 男
    Female, // 女
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

// ==========================================
// 人员角色 (Staff Role)
// ==========================================
// planner 角色可进入值日负责人轮值表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    #[default]
    Regular, // 普通人员
    Planner, // 可担任值日负责人
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaffRole::Regular => write!(f, "regular"),
            StaffRole::Planner => write!(f, "planner"),
        }
    }
}

// ==========================================
// 区域优先级 (Area Priority)
// ==========================================
// 控制阶段顺序: 必扫 → 弹性 → 可选(需当日勾选启用)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaPriority {
    Mandatory, // 必扫区域(每日必须安排)
    Flexible,  // 弹性区域(人手不足可跳过)
    Optional,  // 可选区域(需当日启用)
}

impl fmt::Display for AreaPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AreaPriority::Mandatory => write!(f, "mandatory"),
            AreaPriority::Flexible => write!(f, "flexible"),
            AreaPriority::Optional => write!(f, "optional"),
        }
    }
}

// ==========================================
// 性别限制 (Gender Restriction)
// ==========================================
// female 为硬约束; malePreferred 为软约束,无男性候选时回退到全体合格者
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GenderRestriction {
    #[default]
    #[serde(rename = "none")]
    None, // 无限制
    #[serde(rename = "female")]
    FemaleOnly, // 仅限女性
    #[serde(rename = "malePreferred")]
    MalePreferred, // 男性优先
}

impl fmt::Display for GenderRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenderRestriction::None => write!(f, "none"),
            GenderRestriction::FemaleOnly => write!(f, "female"),
            GenderRestriction::MalePreferred => write!(f, "malePreferred"),
        }
    }
}
