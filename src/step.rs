#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Step<T> {
    Value(T),
    Exhausted,
}

impl<T> Step<T> {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Step::Exhausted)
    }

    pub fn value(self) -> Option<T> {
        self.into()
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Step<U> {
        match self {
            Step::Value(value) => Step::Value(f(value)),
            Step::Exhausted => Step::Exhausted,
        }
    }
}

impl<T> From<Option<T>> for Step<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => Step::Value(value),
            None => Step::Exhausted,
        }
    }
}

impl<T> From<Step<T>> for Option<T> {
    fn from(step: Step<T>) -> Self {
        match step {
            Step::Value(value) => Some(value),
            Step::Exhausted => None,
        }
    }
}
