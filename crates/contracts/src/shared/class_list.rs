use std::fmt;

/// Space separated CSS class list: a base class plus modifiers toggled by flags.
///
/// Example: `ClassList::new("mdl-layout").with("mdl-js-layout", true)` renders
/// as `"mdl-layout mdl-js-layout"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<&'static str>,
}

impl ClassList {
    pub fn new(base: &'static str) -> Self {
        Self {
            classes: vec![base],
        }
    }

    /// Appends `class` when `enabled` is set. Repeated classes are kept once.
    pub fn with(mut self, class: &'static str, enabled: bool) -> Self {
        if enabled && !self.contains(class) {
            self.classes.push(class);
        }
        self
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}
