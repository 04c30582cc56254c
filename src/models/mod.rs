pub mod display_mode;
pub mod permission;
pub mod role;
pub mod user;

/// Hidden id fields arrive as empty strings on create.
pub fn parse_id(raw: Option<&str>) -> Option<i64> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}
