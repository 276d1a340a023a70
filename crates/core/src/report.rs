#![allow(clippy::format_push_string)]
#![allow(clippy::uninlined_format_args)]

use crate::progress::GoalProgress;
use crate::tracker::GoalProgressSet;
use crate::week::WeekWindow;

const BAR_WIDTH: usize = 20;

pub struct ProgressFormatter;

impl ProgressFormatter {
    #[must_use]
    pub fn format(set: &GoalProgressSet, window: &WeekWindow) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                    WEEKLY GOAL PROGRESS                       \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str(&format!(
            "Week Start:            {}\n",
            window.start().format("%Y-%m-%d %H:%M %:z")
        ));
        output.push_str(&format!(
            "Goal Source:           {}\n",
            if set.is_defaults() { "default goals" } else { "weekly plan" }
        ));
        output.push('\n');

        output.push_str("Goals\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        for progress in set.as_slice() {
            output.push_str(&Self::format_goal(progress));
        }
        output.push('\n');

        let summary = set.summary();
        output.push_str("Summary\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            "Completed:             {}/{}\n",
            summary.completed, summary.total
        ));
        output.push_str(&format!(
            "Overall Progress:      {:.0}%\n",
            summary.overall_percentage
        ));
        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");

        if summary.all_completed {
            output.push_str("\n✅  All goals completed this week.\n\n");
        }

        output
    }

    /// One goal as a two-line entry: title with current/target, then the bar.
    #[must_use]
    pub fn format_goal(progress: &GoalProgress) -> String {
        format!(
            "{} {}  ({}/{})\n   {} {:>3.0}%  {}\n",
            progress.icon,
            progress.title,
            format_number(progress.current),
            format_number(progress.target),
            progress_bar(progress.percentage),
            progress.percentage,
            progress.status
        )
    }
}

/// Fixed-width bar; `percentage` is clamped to `[0, 100]`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn progress_bar(percentage: f64) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
