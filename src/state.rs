use crate::constants::INDENT_UNIT;

/// Running state of one cleaning pass.
#[derive(Debug, Default)]
pub struct State {
    pub skip_content: bool,
    pub indent_level: i32,
    pub output: Vec<String>,
}

impl State {
    /// Line break followed by indentation for the current level. Negative
    /// levels (unbalanced end tags) indent by nothing.
    pub fn newline(&self) -> String {
        let depth = usize::try_from(self.indent_level).unwrap_or(0);
        format!("\n{}", INDENT_UNIT.repeat(depth))
    }

    pub fn push(&mut self, fragment: String) {
        self.output.push(fragment);
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    pub fn ends_with_newline(&self) -> bool {
        let newline = self.newline();
        self.output
            .last()
            .map(|fragment| fragment.ends_with(&newline))
            .unwrap_or(false)
    }

    pub fn finish(self) -> String {
        self.output.concat().trim().to_owned()
    }
}
