// ==========================================
// 清扫值日排班系统 - 确定性随机序列
// ==========================================
// 职责: 同日期+同出勤 ⇒ 同排班结果的平局裁决随机源
// 红线: 不是统计学随机数,固定线性同余递推,不得中途重播种
// ==========================================

use crate::domain::types::StaffId;

/// 线性同余参数(与历史排班记录的生成器保持位级一致)
const LCG_MULTIPLIER: u64 = 9301;
const LCG_INCREMENT: u64 = 49297;
const LCG_MODULUS: u64 = 233280;

/// 种子为 0 时的回退值
const FALLBACK_SEED: u32 = 12345;

/// 种子折叠哈希的初始值 (djb2)
const HASH_BASIS: i32 = 5381;

// ==========================================
// SeededRandom - 确定性序列生成器
// ==========================================
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    /// 从 31 位非负种子构造
    pub fn new(seed: u32) -> Self {
        let seed = if seed == 0 { FALLBACK_SEED } else { seed };
        Self { state: seed as u64 }
    }

    /// 产生下一个 [0, 1) 区间的值并推进内部状态
    pub fn next(&mut self) -> f64 {
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.state as f64 / LCG_MODULUS as f64
    }
}

/// 由日期与出勤名单派生当日种子
///
/// # 规则
/// - 出勤 ID 字典序排序后以 ',' 连接,前缀日期字符串
/// - 按 UTF-16 码元自左向右折叠: seed = seed*33 + code (i32 环绕语义)
/// - 取绝对值作为生成器种子
///
/// 排序副本保证: 调用方改变出勤名单的顺序不影响种子,
/// 改变出勤名单的集合才会重洗结果
pub fn derive_seed(date_str: &str, present_staff_ids: &[StaffId]) -> u32 {
    let mut sorted_ids: Vec<&str> = present_staff_ids.iter().map(|s| s.as_str()).collect();
    sorted_ids.sort_unstable();

    let seed_input = format!("{}{}", date_str, sorted_ids.join(","));

    let mut seed: i32 = HASH_BASIS;
    for code in seed_input.encode_utf16() {
        seed = seed.wrapping_mul(33).wrapping_add(code as i32);
    }
    seed.unsigned_abs()
}
