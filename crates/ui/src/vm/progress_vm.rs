use cardio_core::model::ProgressSummary;

use crate::vm::gradient::color_from_gradient;

/// One gradient chip: label text plus its computed background color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressChipVm {
    pub label: String,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub weekly: ProgressChipVm,
    pub monthly: ProgressChipVm,
}

#[must_use]
pub fn map_progress(progress: &ProgressSummary) -> ProgressVm {
    ProgressVm {
        weekly: ProgressChipVm {
            label: format!(
                "This week: {}/{}",
                progress.minutes_this_week(),
                ProgressSummary::WEEKLY_TARGET_MINUTES
            ),
            color: color_from_gradient(progress.weekly_percent()),
        },
        monthly: ProgressChipVm {
            label: format!(
                "This month: {}/{}",
                progress.minutes_this_month(),
                ProgressSummary::MONTHLY_TARGET_MINUTES
            ),
            color: color_from_gradient(progress.monthly_percent()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chips_carry_label_and_gradient_color() {
        let vm = map_progress(&ProgressSummary::new(75, 300));

        assert_eq!(vm.weekly.label, "This week: 75/150");
        assert_eq!(vm.weekly.color, "#ffff00");
        assert_eq!(vm.monthly.label, "This month: 300/600");
        assert_eq!(vm.monthly.color, "#ffff00");
    }

    #[test]
    fn over_target_minutes_stay_green() {
        let vm = map_progress(&ProgressSummary::new(400, 1200));

        assert_eq!(vm.weekly.color, "#00ff00");
        assert_eq!(vm.monthly.color, "#00ff00");
    }
}
