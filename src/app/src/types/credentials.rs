use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Minimum number of characters a WiFi password must have
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const SSID_REQUIRED: &str = "SSID is required.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters.";
pub const DEVICE_REQUIRED: &str = "Please select a device.";
pub const DEVICE_UNKNOWN: &str = "Please select a device from the list.";

/// Paired Bluetooth devices the credentials can be sent to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Device {
    #[serde(rename = "RPi")]
    RPi,
    #[serde(rename = "My Laptop")]
    MyLaptop,
    #[serde(rename = "Smart TV")]
    SmartTv,
    #[serde(rename = "Bluetooth Speaker")]
    BluetoothSpeaker,
}

impl Device {
    /// All selectable devices in display order
    pub const ALL: [Device; 4] = [
        Device::RPi,
        Device::MyLaptop,
        Device::SmartTv,
        Device::BluetoothSpeaker,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::RPi => "RPi",
            Self::MyLaptop => "My Laptop",
            Self::SmartTv => "Smart TV",
            Self::BluetoothSpeaker => "Bluetooth Speaker",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Device {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Device::ALL
            .into_iter()
            .find(|device| device.label() == s)
            .ok_or_else(|| format!("unknown device: {s}"))
    }
}

/// Form fields that carry a validation rule
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Ssid,
    Password,
    Device,
}

/// Validation messages keyed by the field they belong to
pub type FieldErrors = BTreeMap<FormField, String>;

/// Validate the network name (SSID)
pub fn validate_ssid(ssid: &str) -> Result<(), String> {
    if ssid.is_empty() {
        return Err(SSID_REQUIRED.to_string());
    }
    Ok(())
}

/// Validate the WiFi password length
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PASSWORD_TOO_SHORT.to_string());
    }
    Ok(())
}

/// Validate the selected device against the closed device list
pub fn validate_device(device: &str) -> Result<Device, String> {
    if device.is_empty() {
        return Err(DEVICE_REQUIRED.to_string());
    }
    device.parse::<Device>().map_err(|_| DEVICE_UNKNOWN.to_string())
}

/// Raw form values as typed or selected by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CredentialForm {
    pub ssid: String,
    pub password: String,
    pub device: String,
}

impl CredentialForm {
    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Ssid => &mut self.ssid,
            FormField::Password => &mut self.password,
            FormField::Device => &mut self.device,
        }
    }

    pub fn validate_field(&self, field: FormField) -> Result<(), String> {
        match field {
            FormField::Ssid => validate_ssid(&self.ssid),
            FormField::Password => validate_password(&self.password),
            FormField::Device => validate_device(&self.device).map(|_| ()),
        }
    }

    /// Validate every field, collecting one message per failing field
    pub fn validate(&self) -> Result<Credentials, FieldErrors> {
        let mut errors = FieldErrors::new();

        if let Err(e) = validate_ssid(&self.ssid) {
            errors.insert(FormField::Ssid, e);
        }
        if let Err(e) = validate_password(&self.password) {
            errors.insert(FormField::Password, e);
        }
        let device = match validate_device(&self.device) {
            Ok(device) => Some(device),
            Err(e) => {
                errors.insert(FormField::Device, e);
                None
            }
        };

        match device {
            Some(device) if errors.is_empty() => Ok(Credentials {
                ssid: self.ssid.clone(),
                password: self.password.clone(),
                device,
            }),
            _ => Err(errors),
        }
    }
}

/// Credentials that passed validation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub ssid: String,
    pub password: String,
    pub device: Device,
}
