/// The generation pipeline: seed → shuffle → render → tailor → report.
///
/// Random state is consumed in a fixed order: angle shuffle, angle tailoring
/// in shuffled order, step shuffle, step tailoring in shuffled order. Any
/// change to that order changes every seeded report.

use tracing::debug;

use crate::core::seed::seed;
use crate::core::tailor::{tailor_for_audience, truncate_words, MAX_ANGLE_WORDS};
use crate::core::template::{Template, TemplateLibrary};
use crate::core::twister::Twister;
use crate::schema::report::Report;
use crate::schema::tone::Tone;

/// Number of angles in a report.
pub const ANGLE_COUNT: usize = 10;

/// Number of next steps in a report.
pub const STEP_COUNT: usize = 3;

/// Shuffle a copy of `templates` and return the first `count` entries.
fn shuffled_prefix<'a>(
    templates: &'a [Template],
    count: usize,
    rng: &mut Twister,
) -> Vec<&'a Template> {
    let mut order: Vec<&Template> = templates.iter().collect();
    rng.shuffle(&mut order);
    order.truncate(count);
    order
}

/// Pick up to [`ANGLE_COUNT`] angles from `templates`.
///
/// Each angle is rendered with `topic`, tailored, then cut to
/// [`MAX_ANGLE_WORDS`] words.
pub fn generate_angles(
    templates: &[Template],
    topic: &str,
    audience: Option<&str>,
    rng: &mut Twister,
) -> Vec<String> {
    shuffled_prefix(templates, ANGLE_COUNT, rng)
        .into_iter()
        .map(|template| {
            let angle = tailor_for_audience(&template.render(topic), audience, rng);
            truncate_words(&angle, MAX_ANGLE_WORDS)
        })
        .collect()
}

/// Pick up to [`STEP_COUNT`] next steps from `templates`. Steps are tailored
/// but never truncated.
pub fn generate_next_steps(
    templates: &[Template],
    topic: &str,
    audience: Option<&str>,
    rng: &mut Twister,
) -> Vec<String> {
    shuffled_prefix(templates, STEP_COUNT, rng)
        .into_iter()
        .map(|template| tailor_for_audience(&template.render(topic), audience, rng))
        .collect()
}

/// A seeded generator for one (topic, audience) request.
#[derive(Debug)]
pub struct Generator {
    topic: String,
    audience: Option<String>,
    library: TemplateLibrary,
    seed: u32,
    rng: Twister,
}

/// Builder for constructing a `Generator`.
pub struct GeneratorBuilder {
    topic: String,
    audience: Option<String>,
    templates: Option<TemplateLibrary>,
    seed: Option<u32>,
}

impl Generator {
    pub fn builder(topic: &str) -> GeneratorBuilder {
        GeneratorBuilder {
            topic: topic.to_string(),
            audience: None,
            templates: None,
            seed: None,
        }
    }

    /// A generator over the built-in templates, seeded from the inputs.
    pub fn new(topic: &str, audience: Option<&str>) -> Generator {
        Self::builder(topic).audience(audience).build()
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn audience(&self) -> Option<&str> {
        self.audience.as_deref()
    }

    pub fn generate_angles(&mut self, tone: Tone) -> Vec<String> {
        let templates = self
            .library
            .pool(tone)
            .map(|pool| pool.angles.as_slice())
            .unwrap_or_default();
        generate_angles(templates, &self.topic, self.audience.as_deref(), &mut self.rng)
    }

    pub fn generate_next_steps(&mut self, tone: Tone) -> Vec<String> {
        let templates = self
            .library
            .pool(tone)
            .map(|pool| pool.steps.as_slice())
            .unwrap_or_default();
        generate_next_steps(templates, &self.topic, self.audience.as_deref(), &mut self.rng)
    }

    /// Generate the full report: angles first, then steps.
    pub fn generate(&mut self, tone: Tone) -> Report {
        let angles = self.generate_angles(tone);
        let steps = self.generate_next_steps(tone);
        debug!(
            tone = tone.name(),
            angles = angles.len(),
            steps = steps.len(),
            "generated report"
        );
        Report {
            topic: self.topic.clone(),
            tone,
            angles,
            steps,
        }
    }
}

impl GeneratorBuilder {
    /// Set the audience. `None` and `Some("")` behave identically.
    pub fn audience(mut self, audience: Option<&str>) -> Self {
        self.audience = audience.map(str::to_string);
        self
    }

    /// Overlay a custom library on the built-in templates. Tones the custom
    /// library does not define keep their built-in pools.
    pub fn templates(mut self, library: TemplateLibrary) -> Self {
        self.templates = Some(library);
        self
    }

    /// Use an explicit seed instead of deriving one from the inputs.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Generator {
        let mut library = TemplateLibrary::builtin();
        if let Some(custom) = self.templates {
            library.merge(custom);
        }

        let seed = self
            .seed
            .unwrap_or_else(|| seed(&self.topic, self.audience.as_deref()));
        debug!(topic = %self.topic, audience = ?self.audience, seed, "seeded generator");

        Generator {
            topic: self.topic,
            audience: self.audience,
            library,
            seed,
            rng: Twister::new(seed),
        }
    }
}

/// One-shot convenience: build a seeded generator and produce its report.
pub fn generate_report(topic: &str, tone: Tone, audience: Option<&str>) -> Report {
    Generator::new(topic, audience).generate(tone)
}
