/// Maps a progress percentage onto the red→yellow→green chip gradient.
///
/// Input clamps to [0, 100]. Below 50 red stays full and green ramps up;
/// from 50 green stays full and red ramps down; blue is always 0. Returns
/// lowercase `#rrggbb`.
#[must_use]
pub fn color_from_gradient(percent: f64) -> String {
    let value = percent.clamp(0.0, 100.0);

    let (red, green) = if value < 50.0 {
        (255.0, (value / 50.0 * 255.0).round())
    } else {
        (((1.0 - (value - 50.0) / 50.0) * 255.0).round(), 255.0)
    };

    format!("#{:02x}{:02x}00", red as u8, green as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_points() {
        assert_eq!(color_from_gradient(0.0), "#ff0000");
        assert_eq!(color_from_gradient(50.0), "#ffff00");
        assert_eq!(color_from_gradient(100.0), "#00ff00");
    }

    #[test]
    fn out_of_range_clamps() {
        assert_eq!(color_from_gradient(150.0), color_from_gradient(100.0));
        assert_eq!(color_from_gradient(-20.0), color_from_gradient(0.0));
    }

    #[test]
    fn midpoints_round_like_the_gradient() {
        // 25% -> green = round(127.5) = 128
        assert_eq!(color_from_gradient(25.0), "#ff8000");
        // 75% -> red = round(127.5) = 128
        assert_eq!(color_from_gradient(75.0), "#80ff00");
    }
}
