//! Form field value objects

use crate::state::Section;

/// One choice of a select or multi-select control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Select {
        options: Vec<SelectOption>,
        selected: usize,
    },
    Checkbox(bool),
    MultiSelect {
        options: Vec<SelectOption>,
        selected: Vec<bool>,
        /// Option under the keyboard cursor
        cursor: usize,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Where a field lives on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    /// Always visible
    General,
    Section(Section),
    /// Width of the non-buildable strip, shown only when `ane_drop` is "Sim"
    AneWidth,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub group: FieldGroup,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, group: FieldGroup) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            group,
        }
    }

    /// Create a select whose first option starts selected
    pub fn select(name: &str, label: &str, options: &[(&str, &str)], group: FieldGroup) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Select {
                options: to_options(options),
                selected: 0,
            },
            group,
        }
    }

    pub fn checkbox(name: &str, label: &str, group: FieldGroup) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Checkbox(false),
            group,
        }
    }

    /// Create a multi-select with nothing selected
    pub fn multi_select(
        name: &str,
        label: &str,
        options: &[(&str, &str)],
        group: FieldGroup,
    ) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::MultiSelect {
                options: to_options(options),
                selected: vec![false; options.len()],
                cursor: 0,
            },
            group,
        }
    }

    /// Current value as submitted; selects report the chosen option's value
    pub fn value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Select { options, selected } => options
                .get(*selected)
                .map(|o| o.value.clone())
                .unwrap_or_default(),
            FieldValue::Checkbox(checked) => if *checked { "on" } else { "" }.to_string(),
            FieldValue::MultiSelect { .. } => self.selected_values().join(","),
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self.value, FieldValue::Checkbox(true))
    }

    /// Values of the selected options of a multi-select (empty otherwise)
    pub fn selected_values(&self) -> Vec<String> {
        match &self.value {
            FieldValue::MultiSelect {
                options, selected, ..
            } => options
                .iter()
                .zip(selected)
                .filter(|(_, on)| **on)
                .map(|(o, _)| o.value.clone())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Entries this control contributes to the submitted form data.
    ///
    /// Unchecked checkboxes contribute nothing; multi-selects contribute one
    /// entry per selected option.
    pub fn entries(&self) -> Vec<(String, String)> {
        match &self.value {
            FieldValue::Checkbox(false) => Vec::new(),
            FieldValue::MultiSelect { .. } => self
                .selected_values()
                .into_iter()
                .map(|v| (self.name.clone(), v))
                .collect(),
            _ => vec![(self.name.clone(), self.value())],
        }
    }

    /// Set the text value, or select the option carrying `value`
    pub fn set_value(&mut self, value: &str) -> bool {
        match &mut self.value {
            FieldValue::Text(s) => {
                *s = value.to_string();
                true
            }
            FieldValue::Select { options, selected } => {
                match options.iter().position(|o| o.value == value) {
                    Some(i) => {
                        *selected = i;
                        true
                    }
                    None => false,
                }
            }
            FieldValue::Checkbox(checked) => {
                *checked = value == "on";
                true
            }
            FieldValue::MultiSelect { .. } => false,
        }
    }

    /// Push a character to a text value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from a text value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Move to the next option (select) or cursor position (multi-select)
    pub fn next_option(&mut self) {
        match &mut self.value {
            FieldValue::Select { options, selected } if !options.is_empty() => {
                *selected = (*selected + 1) % options.len();
            }
            FieldValue::MultiSelect {
                options, cursor, ..
            } if !options.is_empty() => {
                *cursor = (*cursor + 1) % options.len();
            }
            _ => {}
        }
    }

    pub fn prev_option(&mut self) {
        match &mut self.value {
            FieldValue::Select { options, selected } if !options.is_empty() => {
                *selected = selected.checked_sub(1).unwrap_or(options.len() - 1);
            }
            FieldValue::MultiSelect {
                options, cursor, ..
            } if !options.is_empty() => {
                *cursor = cursor.checked_sub(1).unwrap_or(options.len() - 1);
            }
            _ => {}
        }
    }

    /// Flip a checkbox, or the multi-select option under the cursor
    pub fn toggle(&mut self) {
        match &mut self.value {
            FieldValue::Checkbox(checked) => *checked = !*checked,
            FieldValue::MultiSelect {
                selected, cursor, ..
            } => {
                if let Some(on) = selected.get_mut(*cursor) {
                    *on = !*on;
                }
            }
            _ => {}
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.value, FieldValue::Text(_))
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Select { options, selected } => options
                .get(*selected)
                .map(|o| format!("◂ {} ▸", o.label))
                .unwrap_or_default(),
            FieldValue::Checkbox(checked) => {
                format!("{} {}", if *checked { "[x]" } else { "[ ]" }, self.label)
            }
            FieldValue::MultiSelect {
                options,
                selected,
                cursor,
            } => options
                .iter()
                .zip(selected)
                .enumerate()
                .map(|(i, (o, on))| {
                    let mark = if *on { "[x]" } else { "[ ]" };
                    let pointer = if i == *cursor { "›" } else { " " };
                    format!("{pointer}{mark} {}", o.label)
                })
                .collect::<Vec<_>>()
                .join("  "),
        }
    }
}

fn to_options(options: &[(&str, &str)]) -> Vec<SelectOption> {
    options
        .iter()
        .map(|(value, label)| SelectOption::new(value, label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const YES_NO: &[(&str, &str)] = &[("Não", "Não"), ("Sim", "Sim")];
    const USOS: &[(&str, &str)] = &[
        ("Residencial", "Residencial"),
        ("Comercial", "Comercial"),
        ("Industrial", "Industrial"),
    ];

    #[test]
    fn test_text_field_editing() {
        let mut field = FormField::text("nome_emp", "Nome", FieldGroup::General);
        for c in "Vila".chars() {
            field.push_char(c);
        }
        field.pop_char();
        assert_eq!(field.value(), "Vil");
        assert_eq!(field.entries(), vec![("nome_emp".into(), "Vil".into())]);
    }

    #[test]
    fn test_empty_text_still_submits() {
        let field = FormField::text("bairro_emp", "Bairro", FieldGroup::General);
        assert_eq!(field.entries(), vec![("bairro_emp".into(), String::new())]);
    }

    #[test]
    fn test_select_cycles_both_ways() {
        let mut field = FormField::select("ane_drop", "ANE", YES_NO, FieldGroup::General);
        assert_eq!(field.value(), "Não");
        field.next_option();
        assert_eq!(field.value(), "Sim");
        field.next_option();
        assert_eq!(field.value(), "Não");
        field.prev_option();
        assert_eq!(field.value(), "Sim");
    }

    #[test]
    fn test_set_value_on_select_rejects_unknown() {
        let mut field = FormField::select("ane_drop", "ANE", YES_NO, FieldGroup::General);
        assert!(field.set_value("Sim"));
        assert!(!field.set_value("Talvez"));
        assert_eq!(field.value(), "Sim");
    }

    #[test]
    fn test_checkbox_entries_only_when_checked() {
        let mut field = FormField::checkbox("has_ai", "Possui AI", FieldGroup::General);
        assert!(field.entries().is_empty());
        field.toggle();
        assert!(field.is_checked());
        assert_eq!(field.entries(), vec![("has_ai".into(), "on".into())]);
    }

    #[test]
    fn test_multi_select_entries_per_option() {
        let mut field = FormField::multi_select("usos_multi", "Usos", USOS, FieldGroup::General);
        field.toggle();
        field.next_option();
        field.next_option();
        field.toggle();

        assert_eq!(
            field.selected_values(),
            vec!["Residencial".to_string(), "Industrial".to_string()]
        );
        assert_eq!(
            field.entries(),
            vec![
                ("usos_multi".into(), "Residencial".into()),
                ("usos_multi".into(), "Industrial".into()),
            ]
        );
    }

    #[test]
    fn test_multi_select_cursor_wraps_backwards() {
        let mut field = FormField::multi_select("usos_multi", "Usos", USOS, FieldGroup::General);
        field.prev_option();
        field.toggle();
        assert_eq!(field.selected_values(), vec!["Industrial".to_string()]);
    }

    #[test]
    fn test_display_values() {
        let mut field = FormField::checkbox("has_restricao", "Restrição", FieldGroup::General);
        assert_eq!(field.display_value(), "[ ] Restrição");
        field.toggle();
        assert_eq!(field.display_value(), "[x] Restrição");

        let select = FormField::select("ane_drop", "ANE", YES_NO, FieldGroup::General);
        assert_eq!(select.display_value(), "◂ Não ▸");
    }
}
