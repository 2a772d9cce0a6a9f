//! Shared helpers for unit tests.

use ratatui::buffer::Buffer;

/// Flattens a rendered buffer into a newline-separated string for
/// content assertions.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut result = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            result.push_str(buffer[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            result.push('\n');
        }
    }
    result
}
