//! SOS Landing TUI
//!
//! 游戏《SOS》宣传页的终端版本。
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//!
//! 所有展示文本都经由注入的 `LanguageContext` 解析（`sos-landing-i18n`），
//! 语言选择在启动时从本地配置恢复，切换时立即持久化。

mod app;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use sos_landing_i18n::{
    LanguageContext, LocalPreferenceStore, MemoryPreferenceStore, PreferenceStore, CATALOG,
};

use util::{init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 构建语言上下文（配置目录不可用时退化为内存存储）
    let store: Box<dyn PreferenceStore> = match LocalPreferenceStore::new() {
        Ok(store) => Box::new(store),
        Err(err) => {
            log::warn!("preference store unavailable: {err}");
            Box::new(MemoryPreferenceStore::new())
        }
    };
    let i18n = LanguageContext::new(&CATALOG, store);
    i18n.initialize();

    // 2. 初始化终端
    let mut terminal = init_terminal()?;

    // 3. 创建应用实例
    let mut app = model::App::new(i18n);

    // 4. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 6. 返回结果
    result
}
