/// Template pools: parsing, the built-in library, and RON loading.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::schema::tone::Tone;

/// Name of the single placeholder a template may contain.
pub const TOPIC_PLACEHOLDER: &str = "topic";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template parse error: {0}")]
    Parse(String),
    #[error("unknown tone '{0}' in template library")]
    UnknownTone(String),
    #[error("{kind} pool for tone '{tone}' is empty")]
    EmptyPool { tone: Tone, kind: &'static str },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// A segment of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSegment {
    /// Literal text, emitted as-is.
    Literal(String),
    /// The `{topic}` placeholder.
    Topic,
}

/// A parsed template: a sequence of segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub segments: Vec<TemplateSegment>,
}

impl Template {
    /// Parse a template string into a sequence of segments.
    ///
    /// Syntax:
    /// - `{topic}` → `Topic`
    /// - `{{` / `}}` → literal `{` / `}`
    /// - Everything else → `Literal`
    ///
    /// Any other placeholder name is an error, as are empty, nested,
    /// unclosed and unmatched braces.
    pub fn parse(input: &str) -> Result<Template, TemplateError> {
        let mut segments = Vec::new();
        let mut literal_buf = String::new();
        let chars: Vec<char> = input.chars().collect();
        let len = chars.len();
        let mut i = 0;

        while i < len {
            match chars[i] {
                '{' if i + 1 < len && chars[i + 1] == '{' => {
                    literal_buf.push('{');
                    i += 2;
                }
                '{' => {
                    let start = i + 1;
                    let mut end = start;
                    while end < len && chars[end] != '}' {
                        if chars[end] == '{' {
                            return Err(TemplateError::Parse(
                                "nested braces are not allowed".to_string(),
                            ));
                        }
                        end += 1;
                    }
                    if end == len {
                        return Err(TemplateError::Parse("unclosed brace".to_string()));
                    }

                    let name: String = chars[start..end].iter().collect();
                    if name.is_empty() {
                        return Err(TemplateError::Parse("empty braces".to_string()));
                    }
                    if name != TOPIC_PLACEHOLDER {
                        return Err(TemplateError::Parse(format!(
                            "unknown placeholder '{{{}}}': only {{topic}} is supported",
                            name
                        )));
                    }

                    if !literal_buf.is_empty() {
                        segments.push(TemplateSegment::Literal(std::mem::take(&mut literal_buf)));
                    }
                    segments.push(TemplateSegment::Topic);
                    i = end + 1;
                }
                '}' if i + 1 < len && chars[i + 1] == '}' => {
                    literal_buf.push('}');
                    i += 2;
                }
                '}' => {
                    return Err(TemplateError::Parse(
                        "unmatched closing brace".to_string(),
                    ));
                }
                c => {
                    literal_buf.push(c);
                    i += 1;
                }
            }
        }

        if !literal_buf.is_empty() {
            segments.push(TemplateSegment::Literal(literal_buf));
        }

        Ok(Template { segments })
    }

    /// Build a template from text whose only braces are `{topic}`
    /// placeholders. Used for the built-in tables, which never escape.
    fn interpolating(text: &str) -> Template {
        let mut segments = Vec::new();
        for (i, part) in text.split("{topic}").enumerate() {
            if i > 0 {
                segments.push(TemplateSegment::Topic);
            }
            if !part.is_empty() {
                segments.push(TemplateSegment::Literal(part.to_string()));
            }
        }
        Template { segments }
    }

    /// Substitute the topic into every placeholder.
    pub fn render(&self, topic: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                TemplateSegment::Literal(text) => out.push_str(text),
                TemplateSegment::Topic => out.push_str(topic),
            }
        }
        out
    }
}

/// The angle and next-step templates for one tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePool {
    pub angles: Vec<Template>,
    pub steps: Vec<Template>,
}

/// Template pools keyed by tone.
#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary {
    pub pools: FxHashMap<Tone, TemplatePool>,
}

// RON files key pools by tone name, so we read into intermediate structs
// and convert.

#[derive(Debug, Deserialize)]
#[serde(rename = "Pool")]
struct RonPool {
    angles: Vec<String>,
    steps: Vec<String>,
}

impl TemplateLibrary {
    /// The library compiled into the binary: 15 angles and 6 steps per tone.
    pub fn builtin() -> TemplateLibrary {
        let mut pools = FxHashMap::default();
        for tone in Tone::ALL {
            let (angles, steps) = builtin_texts(tone);
            pools.insert(
                tone,
                TemplatePool {
                    angles: angles.iter().map(|t| Template::interpolating(t)).collect(),
                    steps: steps.iter().map(|t| Template::interpolating(t)).collect(),
                },
            );
        }
        TemplateLibrary { pools }
    }

    /// Load a template library from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<TemplateLibrary, TemplateError> {
        let contents = std::fs::read_to_string(path)?;
        let library = Self::parse_ron(&contents)?;
        debug!(path = %path.display(), tones = library.pools.len(), "loaded template library");
        Ok(library)
    }

    /// Parse a template library from a RON string.
    pub fn parse_ron(input: &str) -> Result<TemplateLibrary, TemplateError> {
        // BTreeMap keeps error reporting stable across runs.
        let raw: BTreeMap<String, RonPool> = ron::from_str(input)?;
        let mut pools = FxHashMap::default();

        for (name, ron_pool) in raw {
            let tone: Tone = name
                .parse()
                .map_err(|_| TemplateError::UnknownTone(name.clone()))?;
            if ron_pool.angles.is_empty() {
                return Err(TemplateError::EmptyPool { tone, kind: "angle" });
            }
            if ron_pool.steps.is_empty() {
                return Err(TemplateError::EmptyPool { tone, kind: "step" });
            }

            let angles = ron_pool
                .angles
                .iter()
                .map(|text| Template::parse(text))
                .collect::<Result<Vec<_>, _>>()?;
            let steps = ron_pool
                .steps
                .iter()
                .map(|text| Template::parse(text))
                .collect::<Result<Vec<_>, _>>()?;
            pools.insert(tone, TemplatePool { angles, steps });
        }

        Ok(TemplateLibrary { pools })
    }

    /// Merge another library into this one. Pools from `other` replace
    /// pools in `self` for the same tone.
    pub fn merge(&mut self, other: TemplateLibrary) {
        for (tone, pool) in other.pools {
            self.pools.insert(tone, pool);
        }
    }

    pub fn pool(&self, tone: Tone) -> Option<&TemplatePool> {
        self.pools.get(&tone)
    }
}

fn builtin_texts(tone: Tone) -> (&'static [&'static str], &'static [&'static str]) {
    match tone {
        Tone::Punchy => (&PUNCHY_ANGLES, &PUNCHY_STEPS),
        Tone::Professional => (&PROFESSIONAL_ANGLES, &PROFESSIONAL_STEPS),
        Tone::Playful => (&PLAYFUL_ANGLES, &PLAYFUL_STEPS),
    }
}

// Pool order is part of the reproducibility contract: the shuffle permutes
// positions, so reordering an entry changes every seeded report.

const PUNCHY_ANGLES: [&str; 15] = [
    "The contrarian take: why {topic} is misunderstood",
    "What everyone gets wrong about {topic}",
    "{topic} explained in one powerful metaphor",
    "The hidden cost of ignoring {topic}",
    "Why {topic} matters more than ever",
    "The {topic} mistake smart people make",
    "{topic}: the untold story",
    "How {topic} changes everything",
    "The {topic} playbook nobody talks about",
    "What {topic} can teach us about success",
    "The future of {topic} starts here",
    "{topic} decoded for the impatient",
    "Why your {topic} approach is outdated",
    "The {topic} revolution is already happening",
    "Stop overthinking {topic}\u{2014}do this instead",
];

const PROFESSIONAL_ANGLES: [&str; 15] = [
    "A framework for understanding {topic}",
    "Key considerations when evaluating {topic}",
    "How {topic} impacts organizational outcomes",
    "Best practices for implementing {topic}",
    "The strategic value of {topic}",
    "Measuring success in {topic} initiatives",
    "Risk factors associated with {topic}",
    "{topic}: a data-driven perspective",
    "Building competency in {topic}",
    "The business case for {topic}",
    "Industry trends shaping {topic}",
    "Optimizing your {topic} strategy",
    "How leaders approach {topic} differently",
    "The economics of {topic}",
    "Integrating {topic} into your workflow",
];

const PLAYFUL_ANGLES: [&str; 15] = [
    "What if {topic} was a superpower?",
    "The {topic} starter pack nobody asked for",
    "{topic} but make it fun",
    "Why {topic} is secretly fascinating",
    "A love letter to {topic}",
    "{topic} for people who hate {topic}",
    "The {topic} rabbit hole worth exploring",
    "Making friends with {topic}",
    "Your {topic} origin story awaits",
    "{topic}: expect the unexpected",
    "The cozy guide to {topic}",
    "Adventures in {topic} land",
    "Why {topic} deserves a second chance",
    "{topic} without the boring parts",
    "The {topic} journey starts with curiosity",
];

const PUNCHY_STEPS: [&str; 6] = [
    "Pick one angle and draft a bold opening line",
    "List three objections your audience might have",
    "Write a one-sentence hook that demands attention",
    "Identify the single biggest misconception to attack",
    "Find a surprising stat or story to lead with",
    "Map out the emotional journey you want readers on",
];

const PROFESSIONAL_STEPS: [&str; 6] = [
    "Outline key stakeholders and their concerns",
    "Gather supporting data or case studies",
    "Draft an executive summary of your main argument",
    "Identify metrics to measure impact",
    "Create a timeline for research and drafting",
    "Schedule a review with subject matter experts",
];

const PLAYFUL_STEPS: [&str; 6] = [
    "Brainstorm five unexpected analogies for your topic",
    "Sketch a quick visual or doodle to capture the vibe",
    "Write a draft as if explaining to a curious friend",
    "Find a meme or cultural reference that fits",
    "List what makes this topic secretly delightful",
    "Try writing the piece you wish existed",
];
