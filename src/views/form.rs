//! Text field plumbing shared by the form containers

/// One editable field as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub secret: bool,
    pub multiline: bool,
}

impl FieldSpec {
    pub const fn text(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            secret: false,
            multiline: false,
        }
    }

    pub const fn secret(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            secret: true,
            multiline: false,
        }
    }

    pub const fn multiline(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            secret: false,
            multiline: true,
        }
    }
}

/// A container with a fixed list of text inputs and one focused input
pub trait Form {
    fn fields(&self) -> Vec<FieldSpec>;
    fn value(&self, index: usize) -> &str;
    fn value_mut(&mut self, index: usize) -> Option<&mut String>;
    fn focus(&self) -> usize;
    fn set_focus(&mut self, index: usize);

    fn focus_next(&mut self) {
        let count = self.fields().len();
        if count > 0 {
            self.set_focus((self.focus() + 1) % count);
        }
    }

    fn focus_previous(&mut self) {
        let count = self.fields().len();
        if count > 0 {
            self.set_focus((self.focus() + count - 1) % count);
        }
    }

    fn insert_char(&mut self, c: char) {
        let focus = self.focus();
        if let Some(value) = self.value_mut(focus) {
            value.push(c);
        }
    }

    fn backspace(&mut self) {
        let focus = self.focus();
        if let Some(value) = self.value_mut(focus) {
            value.pop();
        }
    }

    /// Newline in multiline fields; elsewhere the caller treats Enter as submit
    fn insert_newline(&mut self) -> bool {
        let focus = self.focus();
        let multiline = self.fields().get(focus).is_some_and(|f| f.multiline);
        if multiline {
            self.insert_char('\n');
        }
        multiline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TwoFields {
        values: [String; 2],
        focus: usize,
    }

    impl Form for TwoFields {
        fn fields(&self) -> Vec<FieldSpec> {
            vec![
                FieldSpec::text("Name", ""),
                FieldSpec::multiline("Body", ""),
            ]
        }

        fn value(&self, index: usize) -> &str {
            self.values.get(index).map(String::as_str).unwrap_or("")
        }

        fn value_mut(&mut self, index: usize) -> Option<&mut String> {
            self.values.get_mut(index)
        }

        fn focus(&self) -> usize {
            self.focus
        }

        fn set_focus(&mut self, index: usize) {
            self.focus = index;
        }
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = TwoFields {
            values: Default::default(),
            focus: 0,
        };
        form.focus_previous();
        assert_eq!(form.focus(), 1);
        form.focus_next();
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = TwoFields {
            values: Default::default(),
            focus: 0,
        };
        form.insert_char('h');
        form.insert_char('i');
        form.backspace();
        assert!(!form.insert_newline());

        form.focus_next();
        form.insert_char('x');
        assert!(form.insert_newline());

        assert_eq!(form.value(0), "h");
        assert_eq!(form.value(1), "x\n");
    }
}
