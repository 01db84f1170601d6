//! 页面路由状态

/// 页面枚举
///
/// 每个变体对应落地页的一个区块，由导航栏确认操作切换。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 首屏
    #[default]
    Hero,
    /// 剧情介绍
    Story,
    /// 游戏特性
    Features,
    /// 游戏截图轮播
    Screenshots,
    /// 系统需求
    Requirements,
    /// 玩家评价
    Reviews,
    /// 订阅通讯
    Newsletter,
}
