//! The textual pipeline and its builder.
//!
//! A pipeline is a `|`-separated sequence of steps, each a step name
//! followed by `key=value` parameters and bare flags, with `inv` marking a
//! step run in the inverse direction:
//!
//! ```text
//! cart ellps=intl | helmert x=-87 y=-96 z=-120 | cart inv ellps=GRS80
//! ```
//!
//! The builder owns the formatting. Callers describe steps and parameters;
//! inversion is handled by bracketing: everything added between
//! [`PipelineBuilder::start_inversion`] and [`PipelineBuilder::stop_inversion`]
//! comes out order-reversed with direction toggled.

pub mod compiler;

/// One step of a pipeline under construction
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    name: String,
    inverted: bool,
    /// `key=value` parameters; a flag is a parameter with an empty value
    params: Vec<(String, String)>,
}

impl Step {
    fn new(name: &str) -> Step {
        Step {
            name: name.to_string(),
            inverted: false,
            params: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    fn render(&self) -> String {
        let mut text = self.name.clone();
        if self.inverted {
            text.push_str(" inv");
        }
        for (key, value) in &self.params {
            text.push(' ');
            text.push_str(key);
            if !value.is_empty() {
                text.push('=');
                text.push_str(value);
            }
        }
        text
    }
}

/// Accumulates steps; renders the pipeline text on [`PipelineBuilder::build`]
#[derive(Clone, Debug, Default)]
pub struct PipelineBuilder {
    steps: Vec<Step>,
    brackets: Vec<usize>,
}

impl PipelineBuilder {
    pub fn new() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// Open a new step. Parameters added next land on this step.
    pub fn add_step(&mut self, name: &str) {
        self.steps.push(Step::new(name));
    }

    /// A `key=value` parameter on the current step
    pub fn add_param(&mut self, key: &str, value: &str) {
        if let Some(step) = self.steps.last_mut() {
            step.params.push((key.to_string(), value.to_string()));
        }
    }

    /// A numeric parameter on the current step
    pub fn add_param_real(&mut self, key: &str, value: f64) {
        self.add_param(key, &format!("{value}"));
    }

    /// A bare flag on the current step
    pub fn add_flag(&mut self, flag: &str) {
        if let Some(step) = self.steps.last_mut() {
            step.params.push((flag.to_string(), String::new()));
        }
    }

    /// Open an inversion bracket. Nests.
    pub fn start_inversion(&mut self) {
        self.brackets.push(self.steps.len());
    }

    /// Close the innermost inversion bracket: the steps added since it
    /// opened come out order-reversed, each with its direction toggled
    pub fn stop_inversion(&mut self) {
        let Some(start) = self.brackets.pop() else {
            debug_assert!(false, "stop_inversion without start_inversion");
            return;
        };
        self.steps[start..].reverse();
        for step in &mut self.steps[start..] {
            step.inverted = !step.inverted;
        }
    }

    /// Drop no-op steps and adjacent mutually cancelling steps (same name
    /// and parameters, opposite directions). Repeats to a fixed point, so
    /// a cancellation may expose the next one.
    pub fn simplify(&mut self) {
        loop {
            let before = self.steps.len();
            self.steps.retain(|step| step.name != "noop");

            let mut i = 0;
            while i + 1 < self.steps.len() {
                let (a, b) = (&self.steps[i], &self.steps[i + 1]);
                if a.name == b.name && a.params == b.params && a.inverted != b.inverted {
                    self.steps.drain(i..i + 2);
                    i = i.saturating_sub(1);
                    continue;
                }
                i += 1;
            }
            if self.steps.len() == before {
                return;
            }
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The pipeline text. An empty pipeline is the identity: `noop`.
    pub fn build(&self) -> String {
        if self.steps.is_empty() {
            return "noop".to_string();
        }
        self.steps
            .iter()
            .map(Step::render)
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

// ----- T E S T S ---------------------------------------------------------------------
