/// Format the HUD score label.
pub fn score_label(score: u32) -> String {
    format!("Score: {score}")
}

/// Width of each black side bar that letterboxes a window down to a 4:3 play
/// view. Zero when the window is 4:3 or narrower.
pub fn letterbox_bar_width(window_width: f32, window_height: f32) -> f32 {
    ((window_width - window_height * 4.0 / 3.0) / 2.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_formats_score() {
        assert_eq!(score_label(0), "Score: 0");
        assert_eq!(score_label(42), "Score: 42");
    }

    #[test]
    fn bars_at_default_window() {
        assert_eq!(letterbox_bar_width(1280.0, 720.0), 160.0);
    }

    #[test]
    fn no_bars_for_four_by_three() {
        assert_eq!(letterbox_bar_width(960.0, 720.0), 0.0);
        assert_eq!(letterbox_bar_width(800.0, 720.0), 0.0);
    }
}
