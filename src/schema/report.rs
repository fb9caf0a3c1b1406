use serde::{Deserialize, Serialize};

use super::tone::Tone;

/// Width of the `=` rules framing the report.
pub const REPORT_WIDTH: usize = 60;

/// Width of the `-` rules under section headers.
const SECTION_RULE_WIDTH: usize = 20;

/// A generated set of angles and next steps for one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub topic: String,
    pub tone: Tone,
    pub angles: Vec<String>,
    pub steps: Vec<String>,
}

impl Report {
    /// Render the bordered, fixed-width text block printed by the CLI.
    pub fn render(&self) -> String {
        format_output(&self.topic, &self.angles, &self.steps, self.tone)
    }
}

/// Format angles and steps into the report text.
///
/// Angles are numbered `NN.` (right-aligned, 1-indexed); steps are lettered
/// `a)`, `b)`, ... Lines are joined with `\n` and there is no trailing newline.
pub fn format_output(topic: &str, angles: &[String], steps: &[String], tone: Tone) -> String {
    let rule = "=".repeat(REPORT_WIDTH);
    let section_rule = format!("  {}", "-".repeat(SECTION_RULE_WIDTH));

    let mut lines = Vec::with_capacity(angles.len() + steps.len() + 12);
    lines.push(rule.clone());
    lines.push(format!("  IDEA SPARK: {}", topic.to_uppercase()));
    lines.push(format!("  Tone: {}", tone.name()));
    lines.push(rule.clone());
    lines.push(String::new());
    lines.push("  ANGLES".to_string());
    lines.push(section_rule.clone());

    for (i, angle) in angles.iter().enumerate() {
        lines.push(format!("  {:>2}. {}", i + 1, angle));
    }

    lines.push(String::new());
    lines.push("  NEXT STEPS".to_string());
    lines.push(section_rule);

    for (letter, step) in ('a'..='z').zip(steps) {
        lines.push(format!("   {}) {}", letter, step));
    }

    lines.push(String::new());
    lines.push(rule);

    lines.join("\n")
}
