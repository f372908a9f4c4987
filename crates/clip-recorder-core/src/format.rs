/// Render a second count as the `MM:SS` countdown shown while recording.
pub fn format_elapsed(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
