use chrono::{DateTime, Utc};

/// 历史列表中的时间显示，例如 "Oct 19, 2026, 09:05 AM"
pub fn format_solved_at(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// 题干预览，超出长度时截断并追加省略号
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}…", head.trim_end())
    } else {
        head
    }
}
