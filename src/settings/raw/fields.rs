use serde::Deserialize;

use combobox::JsonFields;

use crate::cli::CliArgs;

use super::super::util::field_name;

/// `[fields]` names used to read object options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FieldsSection {
    pub(super) label: Option<String>,
    pub(super) value: Option<String>,
    pub(super) disabled: Option<String>,
}

impl FieldsSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(name) = cli.label_field.clone() {
            self.label = Some(name);
        }
        if let Some(name) = cli.value_field.clone() {
            self.value = Some(name);
        }
        if let Some(name) = cli.disabled_field.clone() {
            self.disabled = Some(name);
        }
    }

    pub(super) fn finalize(self) -> JsonFields {
        JsonFields {
            label: field_name(self.label, "label"),
            value: field_name(self.value, "value"),
            disabled: field_name(self.disabled, "disabled"),
        }
    }
}
