//! Text field adapter
//!
//! Binds a [`NumberFormatter`] to an editable text field. The field itself is
//! reached only through the [`TextFieldHandle`] capability, so the adapter can
//! drive any UI toolkit (or the in-memory [`MemoryTextField`] used headless).
//!
//! The adapter owns the last display value. On every change it formats the
//! field text, commits the display string and only then moves the caret, since
//! a caret set against stale content is meaningless.

use log::debug;

use crate::cursor::{EditKey, Selection};
use crate::error::FormatError;
use crate::formatter::NumberFormatter;
use crate::types::{FormatResult, RawValue};

/// Capability to read and write an editable text field
///
/// Offsets are char offsets into the current value.
pub trait TextFieldHandle {
    /// Current text of the field
    fn value(&self) -> String;

    /// Replace the text of the field
    fn set_value(&mut self, text: &str);

    /// Current selection; collapsed when it is just a caret
    fn selection(&self) -> Selection;

    /// Move the selection
    fn set_selection(&mut self, start: usize, end: usize);
}

/// A text field held in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTextField {
    value: String,
    selection: Selection,
}

impl MemoryTextField {
    pub fn new(value: impl Into<String>, selection: Selection) -> Self {
        Self {
            value: value.into(),
            selection,
        }
    }

    /// Simulate typing `text` at the caret, replacing any selection.
    pub fn type_text(&mut self, text: &str) {
        let mut chars: Vec<char> = self.value.chars().collect();
        let start = self.selection.start.min(chars.len());
        let end = self.selection.end.min(chars.len());
        let inserted: Vec<char> = text.chars().collect();
        let caret = start + inserted.len();
        chars.splice(start..end, inserted);
        self.value = chars.into_iter().collect();
        self.selection = Selection::caret(caret);
    }

    /// Simulate the default Backspace edit
    pub fn backspace(&mut self) {
        let mut chars: Vec<char> = self.value.chars().collect();
        let Selection { start, end } = self.selection;
        let end = end.min(chars.len());
        let start = if start == end { start.saturating_sub(1) } else { start };
        let start = start.min(end);
        chars.drain(start..end);
        self.value = chars.into_iter().collect();
        self.selection = Selection::caret(start);
    }

    /// Simulate the default Delete edit
    pub fn delete(&mut self) {
        let mut chars: Vec<char> = self.value.chars().collect();
        let start = self.selection.start.min(chars.len());
        let end = if self.selection.is_collapsed() {
            (start + 1).min(chars.len())
        } else {
            self.selection.end.min(chars.len())
        };
        chars.drain(start..end);
        self.value = chars.into_iter().collect();
        self.selection = Selection::caret(start);
    }
}

impl TextFieldHandle for MemoryTextField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, text: &str) {
        self.value = text.to_string();
        let len = self.value.chars().count();
        self.selection = Selection::new(self.selection.start.min(len), self.selection.end.min(len));
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, start: usize, end: usize) {
        self.selection = Selection::new(start, end);
    }
}

/// A formatted numeric text field
#[derive(Debug)]
pub struct NumberField<H: TextFieldHandle> {
    formatter: NumberFormatter,
    handle: H,
    display: String,
    external: Option<RawValue>,
}

impl<H: TextFieldHandle> NumberField<H> {
    /// Bind `formatter` to `handle` and commit the formatted initial value
    ///
    /// # Arguments
    /// * `formatter` - The formatting engine
    /// * `handle` - The field to drive
    /// * `initial` - Externally supplied starting value, if any
    ///
    /// # Returns
    /// * `Result<NumberField<H>, FormatError>` - The bound field
    ///
    /// # Examples
    /// ```
    /// use number_input_format::{
    ///     FormatConfig, MemoryTextField, NumberField, NumberFormatter, RawValue,
    /// };
    ///
    /// let formatter = NumberFormatter::new(FormatConfig::default().with_thousand_separator(true)).unwrap();
    /// let initial = Some(RawValue::Number(1234567.0));
    /// let field = NumberField::new(formatter, MemoryTextField::default(), initial).unwrap();
    /// assert_eq!(field.display_value(), "1,234,567");
    /// ```
    pub fn new(
        formatter: NumberFormatter,
        mut handle: H,
        initial: Option<RawValue>,
    ) -> Result<Self, FormatError> {
        let display = match &initial {
            Some(value) => formatter.format_input(value.clone())?.formatted_value,
            None => String::new(),
        };
        handle.set_value(&display);

        Ok(Self {
            formatter,
            handle,
            display,
            external: initial,
        })
    }

    pub fn formatter(&self) -> &NumberFormatter {
        &self.formatter
    }

    /// The last committed display string
    pub fn display_value(&self) -> &str {
        &self.display
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    pub fn into_handle(self) -> H {
        self.handle
    }

    /// React to a change of the field text
    ///
    /// Formats the current text, commits the display string and then moves the
    /// caret to its remapped position. If the formatter fails the field is left
    /// untouched and the error is returned.
    ///
    /// # Returns
    /// * `Result<FormatResult, FormatError>` - The result to hand to a change callback
    pub fn on_change(&mut self) -> Result<FormatResult, FormatError> {
        let input_value = self.handle.value();
        let cursor_pos = self.handle.selection().start;

        let result = match self.formatter.format_input(input_value.as_str()) {
            Ok(result) => result,
            Err(e) => {
                debug!("leaving field unmodified after format failure: {e}");
                return Err(e);
            }
        };

        self.handle.set_value(&result.formatted_value);
        self.display = result.formatted_value.clone();

        let caret = self
            .formatter
            .remap_cursor(&input_value, &result.formatted_value, cursor_pos);
        self.handle.set_selection(caret, caret);

        Ok(result)
    }

    /// React to a key press before the field applies it
    ///
    /// # Returns
    /// * `bool` - `true` when the default edit must be suppressed
    pub fn on_key_down(&mut self, key: EditKey) -> bool {
        let value = self.handle.value();
        let selection = self.handle.selection();

        match self.formatter.skip_decoration(&value, selection, key) {
            Some(caret) => {
                debug!("{key:?} at {} skips decoration to {caret}", selection.start);
                self.handle.set_selection(caret, caret);
                true
            }
            None => false,
        }
    }

    /// Apply a value supplied from outside the field
    ///
    /// The field is only reformatted when `value` differs from the last
    /// external value.
    ///
    /// # Returns
    /// * `Result<bool, FormatError>` - Whether the field was reformatted
    pub fn set_external_value(&mut self, value: impl Into<RawValue>) -> Result<bool, FormatError> {
        let value = value.into();
        if self.external.as_ref() == Some(&value) {
            return Ok(false);
        }

        let result = self.formatter.format_input(value.clone())?;
        debug!("external value {value:?} reformatted as {:?}", result.formatted_value);
        self.handle.set_value(&result.formatted_value);
        self.display = result.formatted_value;
        self.external = Some(value);
        Ok(true)
    }
}
