use std::fmt;

/// Subject name -> score, kept in the order the subjects were entered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scores(Vec<(String, f64)>);

impl Scores {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Sets the score for `subject`, replacing an existing entry in place.
    pub fn insert(&mut self, subject: impl Into<String>, score: f64) {
        let subject = subject.into();
        match self.0.iter_mut().find(|(name, _)| *name == subject) {
            Some(entry) => entry.1 = score,
            None => self.0.push((subject, score)),
        }
    }

    pub fn get(&self, subject: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(name, _)| name == subject)
            .map(|(_, score)| *score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, score)| (name.as_str(), *score))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Scores {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut scores = Scores::new();
        for (subject, score) in iter {
            scores.insert(subject, score);
        }
        scores
    }
}

impl fmt::Display for Scores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(subject, score)| format!("{}: {}", subject, score))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Qualitative band for an average score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remark {
    Outstanding,
    Good,
    NeedsImprovement,
    Poor,
}

impl Remark {
    /// Bands are inclusive at the lower end: 85, 70 and 50.
    pub fn from_average(average: f64) -> Self {
        if average >= 85.0 {
            Remark::Outstanding
        } else if average >= 70.0 {
            Remark::Good
        } else if average >= 50.0 {
            Remark::NeedsImprovement
        } else {
            Remark::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Remark::Outstanding => "Outstanding",
            Remark::Good => "Good",
            Remark::NeedsImprovement => "Needs Improvement",
            Remark::Poor => "Poor",
        }
    }

    /// Badge drawn next to the label in the dashboard.
    pub fn symbol(self) -> &'static str {
        match self {
            Remark::Outstanding => "★",
            Remark::Good => "✔",
            Remark::NeedsImprovement => "⚠",
            Remark::Poor => "✘",
        }
    }
}

impl fmt::Display for Remark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One student: name, roll number and subject scores.
///
/// Nothing is validated here; the entry form bounds the inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    name: String,
    id: u32,
    scores: Scores,
}

impl Record {
    pub fn new(name: impl Into<String>, id: u32, scores: Scores) -> Self {
        Self {
            name: name.into(),
            id,
            scores,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Arithmetic mean of the scores, 0 when there are none.
    pub fn average(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        let total: f64 = self.scores.iter().map(|(_, score)| score).sum();
        total / self.scores.len() as f64
    }

    pub fn remark(&self) -> Remark {
        Remark::from_average(self.average())
    }
}
