//! Device locale port.

/// Source of the device's preferred language.
pub trait DeviceLocale: Send + Sync {
    /// Raw locale tag such as `fr_FR.UTF-8` or `pt-BR`, if the platform has one.
    fn language_tag(&self) -> Option<String>;
}

/// Device locale fixed at construction time.
#[derive(Debug, Clone, Default)]
pub struct FixedDeviceLocale {
    tag: Option<String>,
}

impl FixedDeviceLocale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
        }
    }

    /// A device that reports no locale at all.
    pub const fn unavailable() -> Self {
        Self { tag: None }
    }
}

impl DeviceLocale for FixedDeviceLocale {
    fn language_tag(&self) -> Option<String> {
        self.tag.clone()
    }
}
