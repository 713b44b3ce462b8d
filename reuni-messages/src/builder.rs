/// Fills `{name}` placeholders in a message template.
///
/// Variables are applied in the order they were added, so a value that
/// itself contains a placeholder is only expanded by later variables.
pub struct MessageBuilder {
    template: &'static str,
    vars: Vec<(&'static str, String)>,
}

impl MessageBuilder {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            vars: Vec::new(),
        }
    }

    pub fn var(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.vars.push((key, value.into()));
        self
    }

    pub fn build(self) -> String {
        self.vars
            .iter()
            .fold(self.template.to_string(), |result, (key, value)| {
                result.replace(&format!("{{{key}}}"), value)
            })
    }
}
