/// A named duration held for display
///
/// There is no identity field: two timers with the same name and duration are
/// indistinguishable and both may live in the store. No validation is done, so
/// an empty name or a zero, negative or NaN duration is accepted as is.
#[derive(Debug, Clone, PartialEq)]
pub struct Timer {
    pub name: String,
    /// Duration in seconds
    pub duration: f64,
}

impl Timer {
    pub fn new(name: impl Into<String>, duration: f64) -> Self {
        Timer {
            name: name.into(),
            duration,
        }
    }
}
