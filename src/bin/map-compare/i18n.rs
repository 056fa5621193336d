//! Static UI strings with per-language lookup and English fallback.
//!
//! Panel captions come from the configuration's own dictionaries; the
//! strings here are the fixed chrome of the application.

/// Languages offered by the top-bar selector, as (code, native name).
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("zh-Hans", "简体中文"),
    ("zh-Hant", "繁體中文"),
    ("ja", "日本語"),
    ("de", "Deutsch"),
];

/// Keys for the fixed UI strings.
#[derive(Debug, Clone, Copy)]
pub enum UiText {
    Title,
    CurrentScale,
    Reset,
    StatusHint,
    NoConfig,
}

/// Resolves a UI string for `lang`. Unknown language codes fall back to
/// English rather than rendering blank.
pub fn ui_text(text: UiText, lang: &str) -> &'static str {
    match text {
        UiText::Title => match lang {
            "zh-Hans" => "比图",
            "zh-Hant" => "比圖",
            "ja" | "de" => "比图 MapCompare",
            _ => "MapCompare",
        },
        UiText::CurrentScale => match lang {
            "zh-Hans" => "当前缩放级别",
            "zh-Hant" => "當前縮放級別",
            "ja" => "現在のズームレベル",
            "de" => "Aktuelle Zoomstufe",
            _ => "Current scale",
        },
        UiText::Reset => match lang {
            "zh-Hans" => "重置",
            "zh-Hant" => "重置",
            "ja" => "リセット",
            "de" => "Zurücksetzen",
            _ => "Reset",
        },
        UiText::StatusHint => match lang {
            "zh-Hans" => "滚轮: 缩放 | 拖动: 平移 | 双击: 放大 | +/-: 缩放 | 0: 重置",
            "zh-Hant" => "滾輪: 縮放 | 拖動: 平移 | 雙擊: 放大 | +/-: 縮放 | 0: 重置",
            _ => "Scroll: Zoom | Drag: Pan | Double-click: Zoom in | +/-: Zoom | 0: Reset",
        },
        UiText::NoConfig => match lang {
            "zh-Hans" => "未加载城市配置。",
            "zh-Hant" => "未載入城市配置。",
            "ja" => "都市設定が読み込まれていません。",
            "de" => "Keine Städtekonfiguration geladen.",
            _ => "No city configuration loaded.",
        },
    }
}
