use crate::{
    error::FormError,
    record::{Record, Scores},
    settings::Settings,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    RollNo,
    Subject(usize),
}

#[derive(Debug, Clone)]
pub struct Slider {
    pub subject: String,
    pub value: u8,
}

/// Input state behind the "Add New Student" sidebar.
#[derive(Debug, Clone)]
pub struct StudentForm {
    pub name: String,
    pub roll_no: String,
    pub sliders: Vec<Slider>,
    pub focus: Field,
    pub min_score: u8,
    pub max_score: u8,
}

impl StudentForm {
    pub fn new(settings: &Settings) -> Self {
        let sliders = settings
            .subjects
            .iter()
            .map(|s| Slider {
                subject: s.name.clone(),
                value: s.default_score.clamp(settings.min_score, settings.max_score),
            })
            .collect();
        Self {
            name: String::new(),
            roll_no: "1".to_string(),
            sliders,
            focus: Field::Name,
            min_score: settings.min_score,
            max_score: settings.max_score,
        }
    }

    fn field_count(&self) -> usize {
        2 + self.sliders.len()
    }

    fn focus_index(&self) -> usize {
        match self.focus {
            Field::Name => 0,
            Field::RollNo => 1,
            Field::Subject(i) => 2 + i,
        }
    }

    fn focus_at(&mut self, index: usize) {
        self.focus = match index {
            0 => Field::Name,
            1 => Field::RollNo,
            i => Field::Subject(i - 2),
        };
    }

    pub fn focus_next(&mut self) {
        let next = (self.focus_index() + 1) % self.field_count();
        self.focus_at(next);
    }

    pub fn focus_prev(&mut self) {
        let count = self.field_count();
        let prev = (self.focus_index() + count - 1) % count;
        self.focus_at(prev);
    }

    pub fn input_char(&mut self, c: char) {
        match self.focus {
            Field::Name => self.name.push(c),
            Field::RollNo if c.is_ascii_digit() => self.roll_no.push(c),
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Field::Name => {
                self.name.pop();
            }
            Field::RollNo => {
                self.roll_no.pop();
            }
            Field::Subject(_) => {}
        }
    }

    /// Steps the focused slider, or the roll number, by `delta`.
    pub fn adjust(&mut self, delta: i16) {
        match self.focus {
            Field::Name => {}
            Field::RollNo => {
                let current = self.roll_no.parse::<u32>().unwrap_or(1) as i64;
                let next = (current + delta as i64).clamp(1, u32::MAX as i64);
                self.roll_no = next.to_string();
            }
            Field::Subject(i) => {
                let (min, max) = (self.min_score as i16, self.max_score as i16);
                if let Some(slider) = self.sliders.get_mut(i) {
                    slider.value = (slider.value as i16 + delta).clamp(min, max) as u8;
                }
            }
        }
    }

    pub fn roll_no(&self) -> Result<u32, FormError> {
        match self.roll_no.parse::<u32>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(FormError::InvalidRollNo),
        }
    }

    pub fn to_record(&self) -> Result<Record, FormError> {
        let id = self.roll_no()?;
        let scores: Scores = self
            .sliders
            .iter()
            .map(|s| (s.subject.clone(), s.value as f64))
            .collect();
        Ok(Record::new(self.name.trim(), id, scores))
    }
}
