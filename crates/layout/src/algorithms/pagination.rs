pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Centralized logic to check if a block fits above the break threshold.
///
/// * `cursor_y`: The current Y position on the page.
/// * `block_height`: The height the block needs.
/// * `threshold`: The lowest Y the block may reach.
pub fn check_fit(cursor_y: f32, block_height: f32, threshold: f32) -> BreakAnalysis {
    let available = (threshold - cursor_y).max(0.0);
    // Use a small epsilon to handle floating point inaccuracies
    const EPSILON: f32 = 0.01;
    BreakAnalysis {
        should_break: block_height > available + EPSILON,
        remaining_height: available,
    }
}

/// True once the cursor has moved past the threshold.
pub fn past_threshold(cursor_y: f32, threshold: f32) -> bool {
    cursor_y > threshold
}
