//! Device registration form state
//!
//! The form collects a device id, name, location and port count. Its submit
//! button is not wired to the topology: pressing it changes nothing.

/// Focusable elements of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    DeviceId,
    DeviceName,
    Location,
    PortCount,
    Submit,
}

impl FormField {
    /// All focusable elements in tab order
    pub const ALL: [FormField; 5] = [
        FormField::DeviceId,
        FormField::DeviceName,
        FormField::Location,
        FormField::PortCount,
        FormField::Submit,
    ];

    /// The four text inputs, in display order
    pub const INPUTS: [FormField; 4] = [
        FormField::DeviceId,
        FormField::DeviceName,
        FormField::Location,
        FormField::PortCount,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::DeviceId => "Device ID",
            FormField::DeviceName => "Device Name",
            FormField::Location => "Location",
            FormField::PortCount => "Number of Ports",
            FormField::Submit => "Register Device",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::DeviceId => "Scan QR or enter ID",
            FormField::DeviceName => "Enter device name",
            FormField::Location => "Enter location",
            FormField::PortCount => "Enter port count",
            FormField::Submit => "",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, FormField::PortCount)
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub device_id: String,
    pub device_name: String,
    pub location: String,
    pub port_count: String,
    pub focus: FormField,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::DeviceId => &self.device_id,
            FormField::DeviceName => &self.device_name,
            FormField::Location => &self.location,
            FormField::PortCount => &self.port_count,
            FormField::Submit => "",
        }
    }

    fn value_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::DeviceId => Some(&mut self.device_id),
            FormField::DeviceName => Some(&mut self.device_name),
            FormField::Location => Some(&mut self.location),
            FormField::PortCount => Some(&mut self.port_count),
            FormField::Submit => None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Type a character into the focused input. The port count only takes
    /// ASCII digits. Returns whether the character was accepted.
    pub fn input(&mut self, c: char) -> bool {
        let field = self.focus;
        if c.is_control() || (field.is_numeric() && !c.is_ascii_digit()) {
            return false;
        }
        match self.value_mut(field) {
            Some(value) => {
                value.push(c);
                true
            }
            None => false,
        }
    }

    pub fn backspace(&mut self) {
        if let Some(value) = self.value_mut(self.focus) {
            value.pop();
        }
    }
}
