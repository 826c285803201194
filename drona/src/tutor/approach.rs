/// One of four pedagogical response styles used to steer the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approach {
    StepByStep,
    Basics,
    Examples,
    Mistakes,
}

impl Approach {
    pub const ALL: [Approach; 4] = [
        Approach::StepByStep,
        Approach::Basics,
        Approach::Examples,
        Approach::Mistakes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StepByStep => "step_by_step",
            Self::Basics => "basics",
            Self::Examples => "examples",
            Self::Mistakes => "mistakes",
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::StepByStep => &[
                "solve",
                "calculate",
                "find",
                "evaluate",
                "determine",
                "compute",
                "derive",
                "what is the value",
                "find the value",
            ],
            Self::Basics => &[
                "explain",
                "what is",
                "define",
                "concept",
                "understand",
                "describe",
                "elaborate",
                "clarify",
                "how does",
                "why is",
            ],
            Self::Examples => &[
                "example",
                "similar",
                "practice",
                "show me",
                "demonstrate",
                "illustrate",
                "give an instance",
                "sample",
                "like",
            ],
            Self::Mistakes => &[
                "mistake",
                "error",
                "wrong",
                "incorrect",
                "avoid",
                "common problem",
                "pitfall",
                "caution",
                "warning",
                "be careful",
            ],
        }
    }

    /// The instructional block embedded in the system prompt for this style.
    pub fn instructions(&self) -> &'static str {
        match self {
            Self::StepByStep => {
                "Break down the problem into clear steps:\n\
                 1. Identify key components\n\
                 2. Apply relevant formulas\n\
                 3. Show calculations\n\
                 4. Explain each step"
            }
            Self::Basics => {
                "Explain fundamental concepts:\n\
                 1. Core principles\n\
                 2. Required formulas\n\
                 3. Key definitions\n\
                 4. Prerequisites"
            }
            Self::Examples => {
                "Provide similar problems:\n\
                 1. Solved example\n\
                 2. Step-by-step solution\n\
                 3. Variations of the problem\n\
                 4. Practice problems"
            }
            Self::Mistakes => {
                "Analyze common errors:\n\
                 1. Typical mistakes\n\
                 2. Why they occur\n\
                 3. How to avoid them\n\
                 4. Verification steps"
            }
        }
    }
}

impl std::fmt::Display for Approach {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the response style whose keywords best match the question.
///
/// Substring counting over the lower-cased question; the style with the
/// strictly highest count wins. Ties and zero matches fall back to
/// step-by-step solving.
pub fn select_approach(question: &str) -> Approach {
    let question_lower = question.to_lowercase();

    let mut best = Approach::StepByStep;
    let mut best_count = 0usize;

    for approach in Approach::ALL {
        let count = approach
            .keywords()
            .iter()
            .filter(|word| question_lower.contains(*word))
            .count();
        if count > best_count {
            best = approach;
            best_count = count;
        }
    }

    if best_count > 0 {
        best
    } else {
        Approach::StepByStep
    }
}
